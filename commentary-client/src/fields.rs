use crate::api::{Error, NewComment, Time};

/// Contents of the new-comment form, as typed so far
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fields {
    pub name: String,
    pub comment: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum FieldAction {
    SetName(String),
    SetComment(String),
    Clear,

    /// Any tag this reducer does not know about
    #[serde(other)]
    Unknown,
}

impl Fields {
    pub fn reduce(&self, action: FieldAction) -> Fields {
        match action {
            FieldAction::SetName(name) => Fields {
                name,
                comment: self.comment.clone(),
            },
            FieldAction::SetComment(comment) => Fields {
                name: self.name.clone(),
                comment,
            },
            FieldAction::Clear => Fields::default(),
            FieldAction::Unknown => self.clone(),
        }
    }

    /// Builds the comment to submit, or the reason it cannot be submitted yet
    pub fn new_comment(&self, date: Time) -> Result<NewComment, Error> {
        let comment = NewComment {
            author: self.name.clone(),
            text: self.comment.clone(),
            date,
        };
        comment.validate()?;
        Ok(comment)
    }
}
