//! Interactive questions asked once the search parameters are settled.

use anyhow::bail;
use std::io::{BufRead, Write};

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> anyhow::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for an answer to {:?}", question.trim());
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks for the keyword to filter listings by. Any text is accepted.
pub fn read_search_term<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<String> {
    ask(input, output, "Search term: ")
}

/// Asks for the number of pages to scrape until a non-negative integer is
/// entered.
pub fn read_page_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<usize> {
    loop {
        let answer = ask(input, output, "Number of pages to scrape: ")?;
        match answer.trim().parse::<usize>() {
            Ok(pages) => return Ok(pages),
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_search_term_keeps_inner_whitespace() {
        let mut input = Cursor::new("  data engineer\r\n");
        let mut output = Vec::new();

        let term = read_search_term(&mut input, &mut output).unwrap();

        assert_eq!(term, "  data engineer");
        assert_eq!(String::from_utf8(output).unwrap(), "Search term: ");
    }

    #[test]
    fn test_page_count_reprompts_until_valid() {
        let mut input = Cursor::new("three\n-1\n 3 \n");
        let mut output = Vec::new();

        let pages = read_page_count(&mut input, &mut output).unwrap();

        assert_eq!(pages, 3);
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Number of pages to scrape: ").count(), 3);
        assert_eq!(printed.matches("Error: ").count(), 2);
    }

    #[test]
    fn test_zero_pages_is_accepted() {
        let mut input = Cursor::new("0\n");
        assert_eq!(read_page_count(&mut input, &mut Vec::new()).unwrap(), 0);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new("abc\n");
        assert!(read_page_count(&mut input, &mut Vec::new()).is_err());
        assert!(read_search_term(&mut Cursor::new(""), &mut Vec::new()).is_err());
    }
}
