mod face;
mod numbers;

pub mod mtl;
pub mod obj;

// Splits `text` into trimmed, non-empty lines and those into space separated tokens.
// Yields the 1-based line number, the directive and its arguments. Comment lines are skipped.
// Runs of spaces are not collapsed, they leave empty arguments behind.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = (usize, &str, Vec<&str>)> {
    text.split('\n')
        .enumerate()
        .filter_map(|(line_no, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            let mut tokens = line.split(' ');
            let token = tokens.next()?;
            Some((line_no + 1, token, tokens.collect()))
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tokenize() {
        let lines: Vec<_> = tokenize("# header\n\nv 1 2 3\r\n  f 1  2 3\n#comment\nusemtl").collect();

        assert_eq!(
            lines,
            vec![
                (3, "v", vec!["1", "2", "3"]),
                (4, "f", vec!["1", "", "2", "3"]),
                (6, "usemtl", vec![]),
            ]
        );
    }
}
