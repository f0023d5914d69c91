use std::fmt;

/// The fixed set of changelog sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Changes,
    BugFixes,
}

impl Category {
    /// Every category in the order sections are rendered
    pub const ALL: [Category; 2] = [Category::Changes, Category::BugFixes];

    /// Section label as it appears in the changelog
    pub fn label(&self) -> &'static str {
        match self {
            Category::Changes => "Changes",
            Category::BugFixes => "Bug Fixes",
        }
    }

    /// Commit type token that files a commit under this category
    pub fn type_token(&self) -> &'static str {
        match self {
            Category::Changes => "change:",
            Category::BugFixes => "fix:",
        }
    }

    /// Look up the category for a commit type token. Only exact matches count.
    pub fn from_type_token(token: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.type_token() == token)
    }

    /// Apply the category's message normalisation.
    ///
    /// Bug fixes are sentence-capitalized: the first character is title-cased and
    /// the remainder lower-cased. Changes are kept verbatim.
    pub fn normalize(&self, message: &str) -> String {
        match self {
            Category::Changes => message.to_string(),
            Category::BugFixes => sentence_capitalize(message),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn sentence_capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized = titlecase(first);
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// Title case of a single character.
///
/// Differs from upper case for the Latin digraphs (`ǆ` -> `ǅ`) and for
/// characters whose upper case expands (`ß` -> `Ss`, `ﬁ` -> `Fi`).
fn titlecase(c: char) -> String {
    let digraph = match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    };
    if let Some(title) = digraph {
        return title.to_string();
    }

    let mut upper = c.to_uppercase();
    match upper.next() {
        Some(head) => {
            let mut title = head.to_string();
            title.push_str(&upper.collect::<String>().to_lowercase());
            title
        }
        None => c.to_string(),
    }
}

/// Messages grouped per category. Both categories are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeMap {
    changes: Vec<String>,
    bug_fixes: Vec<String>,
}

impl ChangeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a category, normalising it first.
    pub fn push(&mut self, category: Category, message: &str) {
        let normalized = category.normalize(message);
        self.bucket_mut(category).push(normalized);
    }

    pub fn messages(&self, category: Category) -> &[String] {
        match category {
            Category::Changes => &self.changes,
            Category::BugFixes => &self.bug_fixes,
        }
    }

    /// Messages for a section label, e.g. `"Bug Fixes"`
    pub fn get(&self, label: &str) -> Option<&[String]> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .map(|category| self.messages(category))
    }

    /// Categories with their messages, in render order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.messages(category)))
    }

    pub fn len(&self) -> usize {
        self.changes.len() + self.bug_fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Changes => &mut self.changes,
            Category::BugFixes => &mut self.bug_fixes,
        }
    }
}
