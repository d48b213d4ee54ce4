use crate::stats::TokenRow;
use std::io::{self, Write};

/// Print the token table to stdout (for scripting)
pub fn print_table(rows: &[TokenRow], top: Option<usize>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, rows, top)?;
    out.flush()
}

/// Tab-separated `token frequency length` lines under a header, at most
/// `top` rows when given.
pub fn write_table<W: Write>(out: &mut W, rows: &[TokenRow], top: Option<usize>) -> io::Result<()> {
    writeln!(out, "token\tfrequency\tlength")?;
    let limit = top.unwrap_or(rows.len());
    for row in rows.iter().take(limit) {
        writeln!(out, "{}\t{}\t{}", row.token, row.frequency, row.length)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_limited_rows() {
        let rows = vec![
            TokenRow { token: "the".into(), frequency: 12, length: 3 },
            TokenRow { token: "run".into(), frequency: 7, length: 3 },
            TokenRow { token: "hills".into(), frequency: 2, length: 5 },
        ];
        let mut buf = Vec::new();
        write_table(&mut buf, &rows, Some(2)).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "token\tfrequency\tlength\nthe\t12\t3\nrun\t7\t3\n"
        );
    }

    #[test]
    fn no_limit_writes_everything() {
        let rows = vec![TokenRow { token: "x".into(), frequency: 1, length: 1 }];
        let mut buf = Vec::new();
        write_table(&mut buf, &rows, None).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 2);
    }
}
