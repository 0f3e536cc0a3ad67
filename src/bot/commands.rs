use teloxide::utils::command::BotCommands;

/// Slash-commands advertised to Telegram for auto-complete.
///
/// Every variant swallows trailing text: deep links arrive as
/// `/start <payload>`, and stray arguments on other commands are ignored.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    /// Show the welcome screen and main menu
    #[command(description = "Start the bot")]
    Start(String),

    /// Show pricing plans
    #[command(description = "View Canva Pro pricing")]
    Plans(String),

    /// Show how to buy
    #[command(description = "Buy Canva Pro Premium")]
    Buy(String),

    /// Show selling points
    #[command(description = "Why choose us?")]
    WhyUs(String),

    /// Show customer reviews
    #[command(description = "See user reviews")]
    Reviews(String),

    /// Show contact details
    #[command(description = "Get help or contact admin")]
    Help(String),
}

impl Command {
    /// Name used as the key into the menu router's command table
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start(_) => "start",
            Command::Plans(_) => "plans",
            Command::Buy(_) => "buy",
            Command::WhyUs(_) => "whyus",
            Command::Reviews(_) => "reviews",
            Command::Help(_) => "help",
        }
    }

    /// Text following the command, e.g. a deep-link payload
    pub fn payload(&self) -> &str {
        match self {
            Command::Start(p)
            | Command::Plans(p)
            | Command::Buy(p)
            | Command::WhyUs(p)
            | Command::Reviews(p)
            | Command::Help(p) => p,
        }
    }
}
