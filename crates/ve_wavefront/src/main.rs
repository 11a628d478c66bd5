use anyhow::{Context, Result};
use log::{info, warn};
use std::{fs, path::Path};
use structopt::StructOpt;
use ve_wavefront::{meta::ObjMeta, utils};
use walkdir::WalkDir;

// Cli arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "ve_wavefront")]
struct CliArgs {
    /// Specify the input folder
    input: String,
    /// Output directory, to place the converted meshes in
    #[structopt(short = "o", long = "output")]
    output: String,
    /// Output debug info
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
#[error("Input folder does not exist: {0}")]
struct MissingInput(String);

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    convert_all(Path::new(&args.input), Path::new(&args.output))
}

fn is_obj(path: &Path) -> bool {
    path.extension()
        .and_then(|x| x.to_str())
        .map_or(false, |x| x.eq_ignore_ascii_case("obj"))
}

// converts every obj below `input`, mirroring the folder structure into `output`
fn convert_all(input: &Path, output: &Path) -> Result<()> {
    if !input.is_dir() {
        return Err(MissingInput(input.display().to_string()).into());
    }

    let objs = WalkDir::new(input)
        .into_iter()
        .filter_map(|entry| entry.map_err(|err| warn!("Skipping path: {}", err)).ok())
        .filter(|entry| entry.file_type().is_file() && is_obj(entry.path()));

    for entry in objs {
        let relative = entry.path().strip_prefix(input)?;
        let target_dir = output.join(relative.parent().unwrap_or_else(|| Path::new("")));
        fs::create_dir_all(&target_dir)
            .with_context(|| format!("Could not create folder: {}", target_dir.display()))?;

        process(entry.path(), &target_dir)?;
    }

    Ok(())
}

fn process(path: &Path, output_dir: &Path) -> Result<()> {
    info!("Processing Wavefront `.obj`-file: `{}`", path.display());

    let meta = ObjMeta::find(path)?;
    let mtl_path = meta.material_library_path(path)?;

    let mut mesh = ve_wavefront::load(path, &mtl_path, |p| fs::read(p))?;
    mesh.flip_axis(meta.flip_axis);

    let data = mesh.to_bytes().context("Could not serialize mesh")?;
    let target = utils::combine_path(output_dir, utils::file_name(path)?, "vem");
    utils::write_file(&target, &data)?;

    info!("Wrote {}", target.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_obj() {
        assert!(is_obj(Path::new("models/cube.obj")));
        assert!(is_obj(Path::new("CUBE.OBJ")));
        assert!(!is_obj(Path::new("models/cube.mtl")));
        assert!(!is_obj(Path::new("models/obj.toml")));
        assert!(!is_obj(Path::new("models/obj")));
    }

    #[test]
    fn test_missing_input_folder() {
        let err = convert_all(Path::new("does/not/exist"), Path::new("out")).unwrap_err();
        assert!(err.downcast_ref::<MissingInput>().is_some());
    }
}
