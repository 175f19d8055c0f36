//! Multi-field form state for the board's dialogs.
//!
//! Every dialog (add, transform, execute) edits the same shape of data: a
//! short list of labeled text fields, some of which must be non-empty before
//! the dialog may be submitted. Required-field validation gates submission
//! rather than raising after the fact.

/// A single editable text field with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct FieldInput {
    buffer: String,
    cursor: usize,
}

impl FieldInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            cursor: text.len(),
            buffer: text.to_string(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn set(&mut self, text: String) {
        self.cursor = text.len();
        self.buffer = text;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in chars, for terminal cursor placement.
    pub fn cursor_chars(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

/// One labeled field in a dialog form.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub required: bool,
    pub input: FieldInput,
}

/// An ordered set of fields with a single focused field.
#[derive(Debug, Clone, Default)]
pub struct DialogForm {
    fields: Vec<FormField>,
    focus: usize,
}

impl DialogForm {
    /// Build an empty form from `(label, required)` pairs.
    pub fn new(specs: &[(&'static str, bool)]) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|&(label, required)| FormField {
                    label,
                    required,
                    input: FieldInput::new(),
                })
                .collect(),
            focus: 0,
        }
    }

    /// Build a form pre-populated with values, e.g. when seeding the
    /// transform or execute dialog from an existing task.
    pub fn seeded(specs: &[(&'static str, bool)], values: &[&str]) -> Self {
        let mut form = Self::new(specs);
        for (field, value) in form.fields.iter_mut().zip(values) {
            field.input = FieldInput::with_text(value);
        }
        form
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focused_index(&self) -> usize {
        self.focus
    }

    pub fn focused_mut(&mut self) -> &mut FieldInput {
        &mut self.fields[self.focus].input
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields[index].input.as_str()
    }

    /// Submission is allowed only when every required field is non-blank.
    pub fn is_submittable(&self) -> bool {
        self.fields
            .iter()
            .all(|f| !f.required || !f.input.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor() {
        let mut input = FieldInput::new();
        input.insert_char('a');
        input.insert_char('b');
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.as_str(), "axb");
        assert_eq!(input.cursor_chars(), 2);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = FieldInput::with_text("电话");
        input.backspace();
        assert_eq!(input.as_str(), "电");
        input.backspace();
        assert!(input.as_str().is_empty());
        // Backspace on empty input is a no-op
        input.backspace();
        assert!(input.as_str().is_empty());
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = FieldInput::with_text("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
    }

    #[test]
    fn test_blank_detection() {
        assert!(FieldInput::with_text("   ").is_blank());
        assert!(!FieldInput::with_text(" x ").is_blank());
    }

    #[test]
    fn test_required_field_blocks_submit() {
        let mut form = DialogForm::new(&[("Name", true), ("Description", false)]);
        assert!(!form.is_submittable());

        form.focused_mut().insert_char('a');
        assert!(form.is_submittable());
    }

    #[test]
    fn test_whitespace_only_required_field_blocks_submit() {
        let mut form = DialogForm::new(&[("Name", true)]);
        form.focused_mut().insert_char(' ');
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_seeded_form_is_submittable() {
        let form = DialogForm::seeded(&[("Name", true), ("Url", false)], &["task", "/api"]);
        assert!(form.is_submittable());
        assert_eq!(form.value(0), "task");
        assert_eq!(form.value(1), "/api");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = DialogForm::new(&[("A", false), ("B", false), ("C", false)]);
        assert_eq!(form.focused_index(), 0);
        form.focus_prev();
        assert_eq!(form.focused_index(), 2);
        form.focus_next();
        assert_eq!(form.focused_index(), 0);
    }
}
