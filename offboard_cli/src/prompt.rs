//! Line-oriented prompts over any reader/writer pair.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a prompt and read one trimmed line; EOF yields `None`.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Free text; blank input returns `default`.
    pub fn text(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        Ok(match self.read_line(prompt)? {
            Some(s) if !s.is_empty() => s,
            _ => default.to_string(),
        })
    }

    /// Free text that must not be blank.
    pub fn required_text(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            match self.read_line(prompt)? {
                Some(s) if !s.is_empty() => return Ok(s),
                Some(_) => writeln!(self.output, "  This field is required.")?,
                None => return Err(eof()),
            }
        }
    }

    /// y/n question; blank takes `default`, closed input is an error.
    pub fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            match self.read_line(&format!("{} {}: ", prompt, hint))?.as_deref() {
                None => return Err(eof()),
                Some("") => return Ok(default),
                Some(s) if s.eq_ignore_ascii_case("y") || s.eq_ignore_ascii_case("yes") => return Ok(true),
                Some(s) if s.eq_ignore_ascii_case("n") || s.eq_ignore_ascii_case("no") => return Ok(false),
                Some(_) => writeln!(self.output, "  Please answer y or n.")?,
            }
        }
    }

    /// Pick one of `options` by 1-based number; blank keeps `default_index`.
    pub fn choose<T: Copy>(&mut self, prompt: &str, options: &[(T, &str)], default_index: usize) -> io::Result<T> {
        writeln!(self.output, "{}", prompt)?;
        for (i, (_, label)) in options.iter().enumerate() {
            let marker = if i == default_index { "*" } else { " " };
            writeln!(self.output, " {}{}. {}", marker, i + 1, label)?;
        }
        loop {
            match self.read_line("Choice: ")? {
                None => return Ok(options[default_index].0),
                Some(s) if s.is_empty() => return Ok(options[default_index].0),
                Some(s) => match s.parse::<usize>() {
                    Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].0),
                    _ => writeln!(self.output, "  Enter a number between 1 and {}.", options.len())?,
                },
            }
        }
    }

    /// A YYYY-MM-DD date; blank returns `None` unless `required`.
    pub fn date(&mut self, prompt: &str, required: bool) -> io::Result<Option<NaiveDate>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None if required => return Err(eof()),
                None => return Ok(None),
            };
            if line.is_empty() {
                if required {
                    writeln!(self.output, "  This field is required.")?;
                    continue;
                }
                return Ok(None);
            }
            match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "  Use the format YYYY-MM-DD.")?,
            }
        }
    }

    /// An integer in `min..=max`; blank returns `default`.
    pub fn number(&mut self, prompt: &str, min: u8, max: u8, default: u8) -> io::Result<u8> {
        loop {
            match self.read_line(prompt)? {
                None => return Ok(default),
                Some(s) if s.is_empty() => return Ok(default),
                Some(s) => match s.parse::<u8>() {
                    Ok(n) if (min..=max).contains(&n) => return Ok(n),
                    _ => writeln!(self.output, "  Enter a number between {} and {}.", min, max)?,
                },
            }
        }
    }
}

fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
}
