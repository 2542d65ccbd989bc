use std::{
    collections::VecDeque,
    fmt::Debug,
    io::{self, BufRead, BufReader, Stdin},
    process,
    str::FromStr,
};

/// Tokenized reader over the engine's stdin protocol. Generic over the
/// underlying reader so protocol parsing is testable against in-memory input.
pub struct Input<R: BufRead> {
    reader: R,
    tokens: VecDeque<String>,
}

impl Input<BufReader<Stdin>> {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }
}

impl Default for Input<BufReader<Stdin>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> Input<R> {
    pub fn from_reader(reader: R) -> Self {
        Input {
            reader,
            tokens: VecDeque::new(),
        }
    }

    /// Next raw line, trimmed. EOF means the engine closed the pipe and the
    /// game is over, so the process exits cleanly.
    pub fn line(&mut self) -> String {
        let mut buf = String::new();
        let bytes_read = self.reader.read_line(&mut buf).unwrap();
        if bytes_read == 0 {
            process::exit(0);
        }
        buf.trim().to_string()
    }

    /// Next whitespace-separated token, parsed. Refills from subsequent lines
    /// as needed; blank lines are skipped.
    pub fn next<T: FromStr>(&mut self) -> T
    where
        T::Err: Debug,
    {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return token.parse().unwrap();
            }
            let line = self.line();
            self.tokens.extend(line.split_whitespace().map(String::from));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokenizes_across_lines() {
        let mut input = Input::from_reader(Cursor::new("3 7\n\n42 hello\n"));
        assert_eq!(input.next::<usize>(), 3);
        assert_eq!(input.next::<i32>(), 7);
        assert_eq!(input.next::<usize>(), 42);
        assert_eq!(input.next::<String>(), "hello");
    }

    #[test]
    fn line_reads_whole_lines() {
        let mut input = Input::from_reader(Cursor::new("{\"A\":1}\n5 6\n"));
        assert_eq!(input.line(), "{\"A\":1}");
        assert_eq!(input.next::<usize>(), 5);
        assert_eq!(input.next::<usize>(), 6);
    }
}
