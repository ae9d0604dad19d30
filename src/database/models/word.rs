/// Primary vocabulary entry. Words are created whole (with their tags),
/// never individually updated, and destroyed only by the bulk delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    pub original: String,
    pub translation: String,
    pub tags: Vec<Tag>,
}

impl Word {
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }
}

/// Label attachable to a word, many-to-many via word_tags. Tags are created
/// implicitly per submission; identity is the row, not the name, so the same
/// name may appear under several ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
}

/// A word submission before it has an id.
#[derive(Debug, Clone)]
pub struct NewWord {
    pub original: String,
    pub translation: String,
    pub tags: Vec<String>,
}
