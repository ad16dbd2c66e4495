use serde::{Deserialize, Serialize};

/// Role of a punch inside a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchRole {
    Entry,
    Pause,
    Return,
    Exit,
}

impl PunchRole {
    /// Positional slots of a day, in punch order.
    pub const SLOTS: [PunchRole; 4] = [
        PunchRole::Entry,
        PunchRole::Pause,
        PunchRole::Return,
        PunchRole::Exit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PunchRole::Entry => "entry",
            PunchRole::Pause => "pause",
            PunchRole::Return => "return",
            PunchRole::Exit => "exit",
        }
    }

    /// Label shown to employees (the backend speaks Portuguese).
    pub fn label(&self) -> &'static str {
        match self {
            PunchRole::Entry => "entrada",
            PunchRole::Pause => "saida almoco",
            PunchRole::Return => "retorno",
            PunchRole::Exit => "saida",
        }
    }

    /// Convert CLI / DB string → enum. Accepts both English and Portuguese codes.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "entry" | "in" | "entrada" => Some(Self::Entry),
            "pause" | "lunch" | "almoco" | "almoço" => Some(Self::Pause),
            "return" | "retorno" => Some(Self::Return),
            "exit" | "out" | "saida" | "saída" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Keyword match over a free-text description.
    ///
    /// Order matters: "saida almoco" is a pause and "retorno almoco" a return.
    pub fn from_label(label: &str) -> Option<Self> {
        let l = label.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| l.contains(w));

        if has(&["retorno", "volta"]) {
            Some(Self::Return)
        } else if has(&["almoco", "almoço", "intervalo", "pausa"]) {
            Some(Self::Pause)
        } else if has(&["entrada"]) {
            Some(Self::Entry)
        } else if has(&["saida", "saída"]) {
            Some(Self::Exit)
        } else {
            None
        }
    }

    /// Positional role: 0 → entry, 1 → pause, 2 → return, 3 → exit.
    /// Events beyond the fourth have no slot.
    pub fn from_position(index: usize) -> Option<Self> {
        Self::SLOTS.get(index).copied()
    }
}
