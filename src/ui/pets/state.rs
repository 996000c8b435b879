use crate::store::NewPet;
use crate::ui::mvi::UiState;

/// Which draft field currently receives input in the add dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Name,
    Kind,
    Age,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Kind,
            Self::Kind => Self::Age,
            Self::Age => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Age,
            Self::Kind => Self::Name,
            Self::Age => Self::Kind,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Kind => "Type",
            Self::Age => "Age",
        }
    }

    pub const ALL: [DraftField; 3] = [Self::Name, Self::Kind, Self::Age];
}

/// Draft form fields, kept as raw text until submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PetDraft {
    pub name: String,
    pub kind: String,
    pub age: String,
}

impl PetDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Kind => &self.kind,
            DraftField::Age => &self.age,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Kind => &mut self.kind,
            DraftField::Age => &mut self.age,
        }
    }

    /// Validate into a store-ready record. Name and type must be non-empty
    /// after trimming; age must be a whole number.
    pub fn validate(&self) -> Result<NewPet, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let kind = self.kind.trim();
        if kind.is_empty() {
            return Err(DraftError::MissingKind);
        }
        let age = self.age.trim();
        if age.is_empty() {
            return Err(DraftError::MissingAge);
        }
        let age = age.parse::<u32>().map_err(|_| DraftError::InvalidAge)?;
        Ok(NewPet {
            name: name.to_string(),
            kind: kind.to_string(),
            age,
        })
    }
}

/// Why a draft was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingName,
    MissingKind,
    MissingAge,
    InvalidAge,
}

impl DraftError {
    /// User-facing message for the snackbar.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingName => "Name is required",
            Self::MissingKind => "Type is required",
            Self::MissingAge => "Age is required",
            Self::InvalidAge => "Age must be a whole number",
        }
    }
}

/// Ephemeral screen state. Everything here is derived or discarded on
/// exit; none of it is persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PetsScreenState {
    pub search: String,
    pub selected: usize,
    pub dialog_open: bool,
    pub draft: PetDraft,
    pub focused: DraftField,
}

impl UiState for PetsScreenState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_focus_cycles_through_all() {
        let mut field = DraftField::Name;
        for expected in [DraftField::Kind, DraftField::Age, DraftField::Name] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(DraftField::Name.prev(), DraftField::Age);
    }

    #[test]
    fn validate_trims_fields() {
        let draft = PetDraft {
            name: "  Rex ".into(),
            kind: " Dog".into(),
            age: " 3 ".into(),
        };
        let pet = draft.validate().unwrap();
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.kind, "Dog");
        assert_eq!(pet.age, 3);
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let draft = PetDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingName));

        let draft = PetDraft {
            name: "Rex".into(),
            kind: "   ".into(),
            age: "3".into(),
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingKind));

        let draft = PetDraft {
            name: "Rex".into(),
            kind: "Dog".into(),
            age: "".into(),
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingAge));
    }

    #[test]
    fn validate_rejects_non_numeric_age() {
        let draft = PetDraft {
            name: "Rex".into(),
            kind: "Dog".into(),
            age: "three".into(),
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidAge));
    }
}
