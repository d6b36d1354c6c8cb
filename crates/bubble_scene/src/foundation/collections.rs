//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a mesh node owned by the [`Scene`](crate::scene::Scene)
    pub struct MeshHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<MeshHandle, T>;
