//! Bot command parsing.

/// Commands the bot acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Send the digest of matches at or above `min_confidence`.
    Digest { min_confidence: u32 },
    /// Show usage.
    Help,
}

/// Parse error for inbound command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

impl BotCommand {
    /// Parse a message of the form `/<trigger>[@bot] [threshold]`.
    ///
    /// A missing or non-numeric threshold falls back to `default_min_confidence`.
    /// Negative thresholds select every match and are clamped to 0.
    pub fn parse(
        text: &str,
        trigger: &str,
        default_min_confidence: u32,
    ) -> Result<Self, CommandParseError> {
        let mut parts = text.split_whitespace();
        let Some(raw_command) = parts.next() else {
            return Err(CommandParseError::NotACommand);
        };
        if !raw_command.starts_with('/') {
            return Err(CommandParseError::NotACommand);
        }

        let command = raw_command
            .split_once('@')
            .map_or(raw_command, |(head, _)| head);

        if command == trigger {
            let min_confidence = parts
                .next()
                .and_then(|arg| arg.parse::<i64>().ok())
                .map_or(default_min_confidence, clamp_threshold);
            return Ok(Self::Digest { min_confidence });
        }

        match command {
            "/help" | "/start" => Ok(Self::Help),
            other => Err(CommandParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn clamp_threshold(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub fn command_help(trigger: &str, default_min_confidence: u32) -> String {
    format!(
        "📋 คำสั่ง\n\n\
        {trigger} - 🏆 ทีเด็ดบอลวันนี้ (ความมั่นใจ {default_min_confidence}+)\n\
        {trigger} <ความมั่นใจ> - 🎯 กำหนดความมั่นใจขั้นต่ำ เช่น {trigger} 9\n\
        /help - 📖 แสดงคำสั่งทั้งหมด"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: &str = "/ทีเด็ด";

    #[test]
    fn trigger_without_threshold_uses_default() {
        assert_eq!(
            BotCommand::parse("/ทีเด็ด", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 8 }
        );
    }

    #[test]
    fn trigger_with_threshold() {
        assert_eq!(
            BotCommand::parse("/ทีเด็ด 9", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 9 }
        );
        assert_eq!(
            BotCommand::parse("  /ทีเด็ด   6  ", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 6 }
        );
    }

    #[test]
    fn non_numeric_threshold_uses_default() {
        assert_eq!(
            BotCommand::parse("/ทีเด็ด many", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 8 }
        );
        assert_eq!(
            BotCommand::parse("/ทีเด็ด 7.5", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 8 }
        );
    }

    #[test]
    fn negative_threshold_selects_everything() {
        assert_eq!(
            BotCommand::parse("/ทีเด็ด -2", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 0 }
        );
        assert_eq!(
            BotCommand::parse("/ทีเด็ด 99999999999", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: u32::MAX }
        );
    }

    #[test]
    fn zero_is_a_valid_threshold() {
        assert_eq!(
            BotCommand::parse("/ทีเด็ด 0", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 0 }
        );
    }

    #[test]
    fn trigger_with_bot_mention() {
        assert_eq!(
            BotCommand::parse("/ทีเด็ด@tipster_bot 7", TRIGGER, 8).unwrap(),
            BotCommand::Digest { min_confidence: 7 }
        );
    }

    #[test]
    fn help_and_start() {
        assert_eq!(BotCommand::parse("/help", TRIGGER, 8).unwrap(), BotCommand::Help);
        assert_eq!(BotCommand::parse("/start", TRIGGER, 8).unwrap(), BotCommand::Help);
    }

    #[test]
    fn unrelated_text_is_not_a_command() {
        assert_eq!(
            BotCommand::parse("hello", TRIGGER, 8),
            Err(CommandParseError::NotACommand)
        );
        assert_eq!(BotCommand::parse("", TRIGGER, 8), Err(CommandParseError::NotACommand));
        assert!(matches!(
            BotCommand::parse("/status", TRIGGER, 8),
            Err(CommandParseError::UnknownCommand(_))
        ));
    }

    #[test]
    fn help_mentions_trigger() {
        assert!(command_help(TRIGGER, 8).contains("/ทีเด็ด"));
    }
}
