use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "handynote", bin_name = "handynote", version)]
#[command(about = "Keyboard shortcut cheat sheets, grouped in sections", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log storage activity to stderr (same as HANDYNOTE_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sections
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Show sections with all their shortcuts (all sections if none given)
    #[command(alias = "v", display_order = 2)]
    View {
        /// Positions or ids of the sections (e.g. 1 vim-4)
        #[arg(num_args = 0..)]
        sections: Vec<String>,
    },

    /// Add a section
    #[command(alias = "n", display_order = 3)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// A shortcut and its description; repeat for more items
        #[arg(
            short,
            long = "item",
            num_args = 2,
            value_names = ["SHORTCUT", "DESCRIPTION"],
            action = ArgAction::Append,
            allow_hyphen_values = true
        )]
        items: Vec<String>,
    },

    /// Change a section's title or items
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Position or id of the section
        section: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// Replace the shortcut of the item at POSITION
        #[arg(
            long,
            num_args = 2,
            value_names = ["POSITION", "SHORTCUT"],
            action = ArgAction::Append,
            allow_hyphen_values = true
        )]
        shortcut: Vec<String>,

        /// Replace the description of the item at POSITION
        #[arg(
            long,
            num_args = 2,
            value_names = ["POSITION", "DESCRIPTION"],
            action = ArgAction::Append,
            allow_hyphen_values = true
        )]
        description: Vec<String>,

        /// Append an item
        #[arg(
            short,
            long = "add-item",
            num_args = 2,
            value_names = ["SHORTCUT", "DESCRIPTION"],
            action = ArgAction::Append,
            allow_hyphen_values = true
        )]
        add_items: Vec<String>,

        /// Remove the item at POSITION
        #[arg(short, long = "remove-item", value_name = "POSITION")]
        remove_items: Vec<usize>,
    },

    /// Delete one or more sections
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Positions or ids of the sections (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        sections: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move a section to another position
    #[command(alias = "mv", display_order = 6)]
    Move {
        /// Current position (1-based)
        from: usize,

        /// New position (1-based)
        to: usize,
    },

    /// Initialize the store (optional utility)
    #[command(display_order = 10)]
    Init,

    /// Get or set configuration
    #[command(display_order = 11)]
    Config {
        /// Configuration key (e.g., title-max)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
