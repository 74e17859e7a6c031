use std::fmt;

pub const EMPTY_SEQUENCE: &str = "empty sequence";

/// Space-separated rendering of a sequence, for diagnostics only.
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a>(pub &'a [i32]);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return f.write_str(EMPTY_SEQUENCE);
        };
        write!(f, "{first}")?;
        for value in rest {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

pub fn render(data: &[i32]) -> String {
    Rendered(data).to_string()
}
