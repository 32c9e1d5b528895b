use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "greet the user and show the panel.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "send a message to all subscribers (owner only).")]
    Broadcast { text: String },
    #[command(description = "send a message to the bot owner.")]
    MessageOwner { text: String },
}
