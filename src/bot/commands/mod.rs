pub mod history;
pub mod status;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Giveaway bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Show the giveaway rules")]
    Start,
    #[command(description = "Show the next draw and your numbers")]
    Status,
    #[command(description = "Show recent draw results")]
    History,
}
