mod checklist;

pub use checklist::ChecklistCommands;
