// toypad/src/token/mod.rs

use crate::constants::{
    PAGE_LEN, VEHICLE_ID_PAGE, VEHICLE_MARKER, VEHICLE_MARKER_PAGE, VEHICLE_UPGRADE0_PAGE,
    VEHICLE_UPGRADE1_PAGE,
};
use crate::types::{Pad, SlotIndex, Uid};

mod info;
pub use info::TokenInfo;

pub mod memory;
pub mod names;
pub mod uid;

pub use memory::TokenMemory;

/// What a token represents to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenIdentity {
    Minifigure { id: u32 },
    Vehicle { id: u32, upgrades: [u32; 2] },
}

impl TokenIdentity {
    pub fn id(&self) -> u32 {
        match self {
            Self::Minifigure { id } | Self::Vehicle { id, .. } => *id,
        }
    }

    pub fn is_minifigure(&self) -> bool {
        matches!(self, Self::Minifigure { .. })
    }

    fn table_name(&self) -> Option<&'static str> {
        match self {
            Self::Minifigure { id } => names::minifigure_name(*id),
            Self::Vehicle { id, .. } => names::vehicle_name(*id),
        }
    }

    /// Whether the id appears in the name tables.
    pub fn is_known(&self) -> bool {
        self.table_name().is_some()
    }

    /// Display name from the tables, or a placeholder for unknown ids.
    pub fn display_name(&self) -> String {
        self.table_name()
            .map(str::to_string)
            .unwrap_or_else(|| names::placeholder_name(self.id()))
    }
}

/// An emulated collectible with protocol-visible memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    slot: Option<SlotIndex>,
    identity: TokenIdentity,
    pad: Pad,
    uid: Uid,
    memory: TokenMemory,
    name: String,
}

impl Token {
    /// Create a minifigure. `resident_count` is the number of resident
    /// tokens already sharing `id`; it keeps duplicate figures distinct.
    pub fn minifigure(id: u32, resident_count: usize, device_identity: &str) -> Self {
        let identity = TokenIdentity::Minifigure { id };
        Self {
            slot: None,
            identity,
            pad: Pad::default(),
            uid: uid::minifigure_uid(id, resident_count, device_identity),
            memory: TokenMemory::new(),
            name: identity.display_name(),
        }
    }

    /// Create a vehicle with a fresh random UID.
    pub fn vehicle(id: u32, upgrade0: u32, upgrade1: u32) -> Self {
        Self::vehicle_with_uid(id, upgrade0, upgrade1, uid::random_uid())
    }

    pub fn vehicle_with_uid(id: u32, upgrade0: u32, upgrade1: u32, uid: Uid) -> Self {
        let mut memory = TokenMemory::new();
        memory.write_page_u32(VEHICLE_UPGRADE0_PAGE, upgrade0);
        memory.write_page_u32(VEHICLE_ID_PAGE, id);
        memory.write_page_u32(VEHICLE_UPGRADE1_PAGE, upgrade1);
        memory.write_page(VEHICLE_MARKER_PAGE, VEHICLE_MARKER);

        let identity = TokenIdentity::Vehicle {
            id,
            upgrades: [upgrade0, upgrade1],
        };
        Self {
            slot: None,
            identity,
            pad: Pad::default(),
            uid,
            memory,
            name: identity.display_name(),
        }
    }

    /// Rebuild a token from persisted parts. The vehicle marker page
    /// decides between minifigure and vehicle. Known ids take their name
    /// from the tables, since stored names may be truncated.
    pub fn restore(id: u32, uid: Uid, memory: TokenMemory, name: &str) -> Self {
        let identity = identity_from_memory(id, &memory);
        let name = if identity.is_known() || name.is_empty() {
            identity.display_name()
        } else {
            name.to_string()
        };
        Self {
            slot: None,
            identity,
            pad: Pad::default(),
            uid,
            memory,
            name,
        }
    }

    pub fn slot(&self) -> Option<SlotIndex> {
        self.slot
    }

    pub fn identity(&self) -> TokenIdentity {
        self.identity
    }

    pub fn id(&self) -> u32 {
        self.identity.id()
    }

    pub fn pad(&self) -> Pad {
        self.pad
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn memory(&self) -> &TokenMemory {
        &self.memory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_vehicle(&self) -> bool {
        !self.identity.is_minifigure()
    }

    pub fn info(&self) -> TokenInfo {
        TokenInfo::from(self)
    }

    pub(crate) fn set_placement(&mut self, slot: Option<SlotIndex>, pad: Pad) {
        self.slot = slot;
        self.pad = pad;
    }

    /// Host write of one page. Writes that touch a vehicle's id or upgrade
    /// pages refresh the identity and display name.
    pub fn write_page(&mut self, page: usize, data: [u8; PAGE_LEN]) -> bool {
        if !self.memory.write_page(page, data) {
            return false;
        }
        if self.is_vehicle()
            && matches!(
                page,
                VEHICLE_UPGRADE0_PAGE | VEHICLE_ID_PAGE | VEHICLE_UPGRADE1_PAGE
            )
        {
            self.identity = identity_from_memory(self.id(), &self.memory);
            self.name = self.identity.display_name();
            log::debug!("vehicle page {:#04x} written, now {}", page, self.name);
        }
        true
    }
}

fn identity_from_memory(id: u32, memory: &TokenMemory) -> TokenIdentity {
    if memory.page(VEHICLE_MARKER_PAGE) == Some(VEHICLE_MARKER) {
        TokenIdentity::Vehicle {
            id: memory.page_u32(VEHICLE_ID_PAGE).unwrap_or(id),
            upgrades: [
                memory.page_u32(VEHICLE_UPGRADE0_PAGE).unwrap_or(0),
                memory.page_u32(VEHICLE_UPGRADE1_PAGE).unwrap_or(0),
            ],
        }
    } else {
        TokenIdentity::Minifigure { id }
    }
}
