pub mod node;
pub mod reference;

pub use self::{
    node::{Group, TemplateNode},
    reference::Reference,
};

/// A parsed query template.
#[derive(Debug, Default, PartialEq)]
pub struct AstRoot {
    tree: Vec<TemplateNode>,
}

impl AstRoot {
    #[must_use]
    pub(crate) fn new(tree: Vec<TemplateNode>) -> Self {
        Self { tree }
    }

    /// Returns the number of placeholder groups in the template.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.tree
            .iter()
            .filter(|node| matches!(node, TemplateNode::Group(_)))
            .count()
    }
}

impl std::ops::Deref for AstRoot {
    type Target = [TemplateNode];

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl PartialEq<&[TemplateNode]> for AstRoot {
    fn eq(&self, other: &&[TemplateNode]) -> bool {
        self.tree == *other
    }
}
