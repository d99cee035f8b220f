/// Index of a request in the caller's input order.
pub type ItemIndex = usize;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum Cell {
    #[default]
    Free,
    Owned { item: ItemIndex },
    // not part of the grid at all
    Hole,
}

impl Cell {
    pub(crate) fn is_free(&self) -> bool {
        matches!(self, Cell::Free)
    }

    pub(crate) fn owner(&self) -> Option<ItemIndex> {
        match self {
            Cell::Owned { item } => Some(*item),
            _ => None,
        }
    }
}
