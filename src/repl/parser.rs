pub const EXIT_SENTINEL: &str = "exit";
pub const SEPARATOR: char = ':';

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    MissingSeparator,
    Turn(Turn<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn<'a> {
    pub persona_name: &'a str,
    pub message: &'a str,
}

/// Split on the first separator only; both halves are trimmed.
pub fn parse_line(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
        return Input::Exit;
    }

    match line.split_once(SEPARATOR) {
        Some((name, message)) => Input::Turn(Turn {
            persona_name: name.trim(),
            message: message.trim(),
        }),
        None => Input::MissingSeparator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn<'a>(persona_name: &'a str, message: &'a str) -> Input<'a> {
        Input::Turn(Turn { persona_name, message })
    }

    #[test]
    fn test_exit_any_case() {
        assert_eq!(parse_line("exit"), Input::Exit);
        assert_eq!(parse_line("  EXIT \n"), Input::Exit);
        assert_eq!(parse_line("eXiT"), Input::Exit);
    }

    #[test]
    fn test_exit_with_message_is_not_the_sentinel() {
        assert_eq!(parse_line("exit: now"), turn("exit", "now"));
        assert_eq!(parse_line("exit now"), Input::MissingSeparator);
    }

    #[test]
    fn test_basic_turn_is_trimmed() {
        assert_eq!(
            parse_line("  CEO :   What should our Q3 priority be?  \n"),
            turn("CEO", "What should our Q3 priority be?")
        );
    }

    #[test]
    fn test_splits_on_first_separator_only() {
        assert_eq!(parse_line("CEO: please: respond"), turn("CEO", "please: respond"));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(parse_line("CEO hello"), Input::MissingSeparator);
        assert_eq!(parse_line(""), Input::MissingSeparator);
    }

    #[test]
    fn test_empty_halves_are_kept() {
        assert_eq!(parse_line(": hello"), turn("", "hello"));
        assert_eq!(parse_line("CEO:"), turn("CEO", ""));
    }
}
