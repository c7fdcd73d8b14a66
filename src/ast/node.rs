use super::Reference;

#[derive(Clone, PartialEq, Debug)]
pub enum TemplateNode {
    /// Template text copied to the result unchanged.
    Text(String),
    /// `\{ref1,ref2,...}`
    Group(Group),
    /// `\@`, expanded after every group has been resolved.
    Rest,
}

/// A placeholder group and its alternatives, in the order they are tried.
#[derive(Clone, PartialEq, Debug)]
pub struct Group {
    /// Byte offset of the `\{` in the template.
    pub pos: usize,
    /// The text between the braces.
    pub source: String,
    pub alternatives: Vec<Reference>,
}
