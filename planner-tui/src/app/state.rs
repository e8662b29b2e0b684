use planner_core::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    #[default]
    Calendar,
    Form,
    Tasks,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Calendar => FocusedPane::Form,
            FocusedPane::Form => FocusedPane::Tasks,
            FocusedPane::Tasks => FocusedPane::Calendar,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusedPane::Calendar => FocusedPane::Tasks,
            FocusedPane::Form => FocusedPane::Calendar,
            FocusedPane::Tasks => FocusedPane::Form,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Priority,
    Time,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Priority => FormField::Time,
            FormField::Time => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Time,
            FormField::Priority => FormField::Title,
            FormField::Time => FormField::Priority,
        }
    }
}

/// A single-line text input with a cursor (byte offset, always on a char boundary).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}

const TIME_INPUT_MAX_LEN: usize = 5;

/// The "add task" form. Priority persists between submissions, like a
/// dropdown that keeps its last choice.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: TextInput,
    pub priority: Priority,
    pub time: TextInput,
    pub focused_field: FormField,
}

impl TaskForm {
    /// Type into the focused field. The time field takes `HH:MM` characters only.
    pub fn input_char(&mut self, c: char) {
        match self.focused_field {
            FormField::Title => self.title.insert(c),
            FormField::Time => {
                if (c.is_ascii_digit() || c == ':') && self.time.value.len() < TIME_INPUT_MAX_LEN {
                    self.time.insert(c);
                }
            }
            FormField::Priority => match c {
                'l' | 'L' => self.priority = Priority::Low,
                'm' | 'M' => self.priority = Priority::Medium,
                'h' | 'H' => self.priority = Priority::High,
                _ => {}
            },
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_field {
            FormField::Title => self.title.backspace(),
            FormField::Time => self.time.backspace(),
            FormField::Priority => {}
        }
    }

    pub fn move_left(&mut self) {
        match self.focused_field {
            FormField::Title => self.title.move_left(),
            FormField::Time => self.time.move_left(),
            FormField::Priority => self.priority = self.priority.cycle_previous(),
        }
    }

    pub fn move_right(&mut self) {
        match self.focused_field {
            FormField::Title => self.title.move_right(),
            FormField::Time => self.time.move_right(),
            FormField::Priority => self.priority = self.priority.cycle_next(),
        }
    }

    /// Clear title and time after a successful add.
    pub fn reset_inputs(&mut self) {
        self.title.clear();
        self.time.clear();
        self.focused_field = FormField::Title;
    }
}
