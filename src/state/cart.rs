#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

/// Shopping cart: variant ids in the order they were added.
///
/// Duplicates are allowed; the quantity of an item is its number of
/// occurrences. Only [`CartState::add`] and [`CartState::remove`] mutate it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<u32>,
}

impl CartState {
    #[must_use]
    pub fn items(&self) -> &[u32] {
        &self.items
    }

    pub fn add(&mut self, variant_id: u32) {
        self.items.push(variant_id);
        log::debug!("cart: added {variant_id} ({} item(s))", self.items.len());
    }

    /// Remove the first occurrence of `variant_id`. No-op if absent.
    pub fn remove(&mut self, variant_id: u32) -> bool {
        let Some(pos) = self.items.iter().position(|id| *id == variant_id) else {
            return false;
        };
        self.items.remove(pos);
        log::debug!("cart: removed {variant_id} ({} item(s))", self.items.len());
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn count_of(&self, variant_id: u32) -> usize {
        self.items.iter().filter(|id| **id == variant_id).count()
    }
}
