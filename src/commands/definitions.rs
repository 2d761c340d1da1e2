//! Command definitions for declarative command metadata.
//!
//! This module provides a declarative way to define commands with their
//! arguments, descriptions, and other metadata. This enables:
//! - Auto-generated help text
//! - A single record of which commands need a created lot

/// Definition of a command argument.
#[derive(Debug, Clone)]
pub struct ArgDef {
    /// Argument name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Whether this argument is required.
    pub required: bool,
    /// Argument type hint.
    pub arg_type: ArgType,
}

/// Type hint for argument values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// Plain string value.
    String,
    /// Integer value.
    Integer,
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Primary command name (the first token on the line).
    pub name: &'static str,
    /// Short description shown in help.
    pub description: &'static str,
    /// Detailed usage information.
    pub usage: &'static str,
    /// Argument definitions.
    pub args: &'static [ArgDef],
    /// Whether this command needs `create_parking_lot` to have run first.
    pub requires_lot: bool,
    /// Category for grouping in help.
    pub category: CommandCategory,
}

/// Category for grouping commands in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    /// Lot management commands.
    Lot,
    /// Read-only report commands.
    Reports,
    /// General commands.
    General,
}

impl CommandCategory {
    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lot => "Lot commands",
            Self::Reports => "Report commands",
            Self::General => "General commands",
        }
    }
}

/// All command definitions.
pub static COMMANDS: &[CommandDef] = &[
    // Lot commands
    CommandDef {
        name: "create_parking_lot",
        description: "Create the lot, replacing any existing one",
        usage: "create_parking_lot <number_of_slots>",
        args: &[ArgDef {
            name: "number_of_slots",
            description: "Positive slot count",
            required: true,
            arg_type: ArgType::Integer,
        }],
        requires_lot: false,
        category: CommandCategory::Lot,
    },
    CommandDef {
        name: "park",
        description: "Park a vehicle in the lowest free slot",
        usage: "park <registration_number> <color> <vehicle_type>",
        args: &[
            ArgDef {
                name: "registration_number",
                description: "Registration number",
                required: true,
                arg_type: ArgType::String,
            },
            ArgDef {
                name: "color",
                description: "Vehicle colour",
                required: true,
                arg_type: ArgType::String,
            },
            ArgDef {
                name: "vehicle_type",
                description: "car or motorcycle",
                required: true,
                arg_type: ArgType::String,
            },
        ],
        requires_lot: true,
        category: CommandCategory::Lot,
    },
    CommandDef {
        name: "leave",
        description: "Free a slot by number",
        usage: "leave <slot_number>",
        args: &[ArgDef {
            name: "slot_number",
            description: "Slot number to free",
            required: true,
            arg_type: ArgType::Integer,
        }],
        requires_lot: true,
        category: CommandCategory::Lot,
    },
    // Report commands
    CommandDef {
        name: "status",
        description: "List occupied slots",
        usage: "status",
        args: &[],
        requires_lot: true,
        category: CommandCategory::Reports,
    },
    CommandDef {
        name: "type_of_vehicles",
        description: "Slot numbers holding a vehicle type",
        usage: "type_of_vehicles <vehicle_type>",
        args: &[ArgDef {
            name: "vehicle_type",
            description: "car or motorcycle",
            required: true,
            arg_type: ArgType::String,
        }],
        requires_lot: true,
        category: CommandCategory::Reports,
    },
    CommandDef {
        name: "registration_numbers_for_vehicle_with_odd_plate",
        description: "Registrations with odd numeric plates",
        usage: "registration_numbers_for_vehicle_with_odd_plate",
        args: &[],
        requires_lot: true,
        category: CommandCategory::Reports,
    },
    CommandDef {
        name: "registration_numbers_for_vehicle_with_even_plate",
        description: "Registrations with even numeric plates",
        usage: "registration_numbers_for_vehicle_with_even_plate",
        args: &[],
        requires_lot: true,
        category: CommandCategory::Reports,
    },
    CommandDef {
        name: "slot_numbers_for_vehicle_with_colour",
        description: "Slot numbers holding a colour",
        usage: "slot_numbers_for_vehicle_with_colour <colour>",
        args: &[ArgDef {
            name: "colour",
            description: "Colour to match (case-insensitive)",
            required: true,
            arg_type: ArgType::String,
        }],
        requires_lot: true,
        category: CommandCategory::Reports,
    },
    CommandDef {
        name: "slot_number_for_registration_number",
        description: "Slot holding a registration number",
        usage: "slot_number_for_registration_number <registration_number>",
        args: &[ArgDef {
            name: "registration_number",
            description: "Registration number to find",
            required: true,
            arg_type: ArgType::String,
        }],
        requires_lot: true,
        category: CommandCategory::Reports,
    },
    // General commands
    CommandDef {
        name: "help",
        description: "Show this help message",
        usage: "help",
        args: &[],
        requires_lot: false,
        category: CommandCategory::General,
    },
    CommandDef {
        name: "exit",
        description: "End the session",
        usage: "exit",
        args: &[],
        requires_lot: false,
        category: CommandCategory::General,
    },
];

/// Generates help text from command definitions.
pub fn generate_help_text() -> String {
    // Group commands by category
    let categories = [
        CommandCategory::Lot,
        CommandCategory::Reports,
        CommandCategory::General,
    ];

    let category_blocks = categories
        .iter()
        .filter_map(|category| {
            let cmds: Vec<_> = COMMANDS
                .iter()
                .filter(|c| c.category == *category)
                .collect();

            if cmds.is_empty() {
                return None;
            }

            let command_lines = cmds
                .iter()
                .map(|cmd| format!("  {:<58} - {}\n", cmd.usage, cmd.description))
                .collect::<Vec<_>>()
                .join("");

            Some(format!("{}:\n{}\n", category.display_name(), command_lines))
        })
        .collect::<Vec<_>>()
        .join("");

    let notes = [
        "Notes:",
        "  The first word selects the command, case-insensitively.",
        "  Arguments are separated by single spaces; quoting is not supported.",
    ]
    .join("\n");

    format!("{}{}", category_blocks, notes)
}

/// Finds a command definition by name.
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
    let name_lower = name.to_lowercase();
    COMMANDS.iter().find(|c| c.name == name_lower)
}

/// Returns commands that require a created lot.
pub fn commands_requiring_lot() -> impl Iterator<Item = &'static CommandDef> {
    COMMANDS.iter().filter(|c| c.requires_lot)
}
