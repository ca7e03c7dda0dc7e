use {
    crate::remote_id::{Duid, EthernetRemoteId},
    itertools::Itertools as _,
    slotmap::SlotMap,
    std::fmt::Write as _,
};

slotmap::new_key_type! {
    pub struct SwitchKey;
    pub struct SlotKey;
    pub struct ModuleKey;
    pub struct PortKey;
}

/// Error for out-of-range interface numbering fields.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{field} must be in range 0..={max}, got {value}")]
pub struct RangeError {
    pub field: &'static str,
    pub max: u16,
    pub value: u16,
}

macro_rules! bounded_field {
    ($name:ident, $repr:ty, $max:expr, $label:literal) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            pub const MAX: $repr = $max;

            pub fn new(value: $repr) -> Result<Self, RangeError> {
                if value <= Self::MAX {
                    Ok(Self(value))
                } else {
                    Err(RangeError {
                        field: $label,
                        max: u16::from(Self::MAX),
                        value: u16::from(value),
                    })
                }
            }

            pub fn get(self) -> $repr {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// Bit widths come from the Ethernet Remote-ID wire format
bounded_field!(ModuleNr, u8, 0b11, "module");
bounded_field!(PortNr, u8, 0b11_1111, "port");
bounded_field!(VlanId, u16, 0xfff, "VLAN");

pub struct Switch {
    pub name: String,
    pub duid: Duid,
}

pub struct Slot {
    pub switch: SwitchKey,
    /// Slots use the full 8-bit range
    pub slot_nr: u8,
    pub has_modules: bool,
}

pub struct Module {
    pub slot: SlotKey,
    pub module_nr: ModuleNr,
}

pub struct Port {
    pub module: ModuleKey,
    pub port_nr: PortNr,
    /// VLAN 0 is a wildcard that matches any VLAN
    pub vlan: VlanId,
    pub new_enterprise_number: u32,
    pub new_remote_id: Vec<u8>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("a switch named {0:?} already exists")]
    DuplicateSwitchName(String),
    #[error("slot {0} already exists on this switch")]
    DuplicateSlot(u8),
    #[error("module {0} already exists in this slot")]
    DuplicateModule(ModuleNr),
    #[error("a port with this number and VLAN already exists on this module")]
    DuplicatePort,
    #[error("slots without modules can only have a dummy module with nr 0")]
    DummyModuleOnly,
    #[error("this slot has multiple modules, cannot clear has-modules flag")]
    HasMultipleModules,
}

/// In-memory store of the switch/slot/module/port hierarchy.
#[derive(Default)]
pub struct MappingStore {
    pub switches: SlotMap<SwitchKey, Switch>,
    pub slots: SlotMap<SlotKey, Slot>,
    pub modules: SlotMap<ModuleKey, Module>,
    pub ports: SlotMap<PortKey, Port>,
}

impl MappingStore {
    pub fn add_switch(&mut self, name: String, duid: Duid) -> Result<SwitchKey, MappingError> {
        if self.switches.values().any(|sw| sw.name == name) {
            return Err(MappingError::DuplicateSwitchName(name));
        }
        Ok(self.switches.insert(Switch { name, duid }))
    }

    /// Module-less slots get their dummy module 0 created right away.
    pub fn add_slot(
        &mut self,
        switch: SwitchKey,
        slot_nr: u8,
        has_modules: bool,
    ) -> Result<SlotKey, MappingError> {
        if self
            .slots
            .values()
            .any(|s| s.switch == switch && s.slot_nr == slot_nr)
        {
            return Err(MappingError::DuplicateSlot(slot_nr));
        }
        let key = self.slots.insert(Slot {
            switch,
            slot_nr,
            has_modules,
        });
        if !has_modules {
            self.modules.insert(Module {
                slot: key,
                module_nr: ModuleNr::default(),
            });
        }
        Ok(key)
    }

    pub fn add_module(
        &mut self,
        slot: SlotKey,
        module_nr: ModuleNr,
    ) -> Result<ModuleKey, MappingError> {
        if !self.slots[slot].has_modules && module_nr.get() != 0 {
            return Err(MappingError::DummyModuleOnly);
        }
        if self
            .modules
            .values()
            .any(|m| m.slot == slot && m.module_nr == module_nr)
        {
            return Err(MappingError::DuplicateModule(module_nr));
        }
        Ok(self.modules.insert(Module { slot, module_nr }))
    }

    pub fn add_port(&mut self, port: Port) -> Result<PortKey, MappingError> {
        if self.ports.values().any(|p| {
            p.module == port.module && p.port_nr == port.port_nr && p.vlan == port.vlan
        }) {
            return Err(MappingError::DuplicatePort);
        }
        Ok(self.ports.insert(port))
    }

    /// Replace a port in place, keeping the uniqueness constraint.
    pub fn update_port(&mut self, key: PortKey, port: Port) -> Result<(), MappingError> {
        if self.ports.iter().any(|(k, p)| {
            k != key && p.module == port.module && p.port_nr == port.port_nr && p.vlan == port.vlan
        }) {
            return Err(MappingError::DuplicatePort);
        }
        self.ports[key] = port;
        Ok(())
    }

    /// Clearing has-modules renumbers a lone module to 0 and fails when
    /// the slot really has several modules. Setting it never fails.
    pub fn set_has_modules(&mut self, slot: SlotKey, has_modules: bool) -> Result<(), MappingError> {
        if !has_modules {
            let keys: Vec<ModuleKey> = self
                .modules
                .iter()
                .filter(|(_, m)| m.slot == slot)
                .map(|(k, _)| k)
                .collect();
            match keys.as_slice() {
                [] => {
                    self.modules.insert(Module {
                        slot,
                        module_nr: ModuleNr::default(),
                    });
                }
                &[only] => self.modules[only].module_nr = ModuleNr::default(),
                _ => return Err(MappingError::HasMultipleModules),
            }
        }
        self.slots[slot].has_modules = has_modules;
        Ok(())
    }

    pub fn remove_switch(&mut self, key: SwitchKey) {
        let slots: Vec<SlotKey> = self
            .slots
            .iter()
            .filter(|(_, s)| s.switch == key)
            .map(|(k, _)| k)
            .collect();
        for slot in slots {
            self.remove_slot(slot);
        }
        self.switches.remove(key);
    }

    pub fn remove_slot(&mut self, key: SlotKey) {
        let modules: Vec<ModuleKey> = self
            .modules
            .iter()
            .filter(|(_, m)| m.slot == key)
            .map(|(k, _)| k)
            .collect();
        self.ports.retain(|_, p| !modules.contains(&p.module));
        for module in modules {
            self.modules.remove(module);
        }
        self.slots.remove(key);
    }

    pub fn remove_port(&mut self, key: PortKey) {
        self.ports.remove(key);
    }

    pub fn slot_count(&self, switch: SwitchKey) -> usize {
        self.slots.values().filter(|s| s.switch == switch).count()
    }

    pub fn port_count(&self, switch: SwitchKey) -> usize {
        self.ports
            .values()
            .filter(|p| self.slots[self.modules[p.module].slot].switch == switch)
            .count()
    }

    /// `<switch> Port <slot>/<port>`, with the module number included when
    /// the slot has modules, and a ` (VLAN n)` suffix unless wildcard.
    pub fn port_label(&self, key: PortKey) -> String {
        let port = &self.ports[key];
        let module = &self.modules[port.module];
        let slot = &self.slots[module.slot];
        let switch = &self.switches[slot.switch];
        let mut label = if slot.has_modules {
            format!(
                "{} Port {}/{}/{}",
                switch.name, slot.slot_nr, module.module_nr, port.port_nr
            )
        } else {
            format!("{} Port {}/{}", switch.name, slot.slot_nr, port.port_nr)
        };
        if port.vlan.get() != 0 {
            let _ = write!(label, " (VLAN {})", port.vlan);
        }
        label
    }

    /// Dummy modules are labeled by their slot alone.
    pub fn module_label(&self, key: ModuleKey) -> String {
        let module = &self.modules[key];
        let slot = &self.slots[module.slot];
        let switch = &self.switches[slot.switch];
        if !slot.has_modules && module.module_nr.get() == 0 {
            format!("{} Slot {}", switch.name, slot.slot_nr)
        } else {
            format!(
                "{} Slot {} Module {}",
                switch.name, slot.slot_nr, module.module_nr
            )
        }
    }

    /// The incoming Remote-ID a port is matched against, built from its
    /// position and the switch DUID.
    pub fn port_remote_id(&self, key: PortKey) -> EthernetRemoteId {
        let port = &self.ports[key];
        let module = &self.modules[port.module];
        let slot = &self.slots[module.slot];
        let switch = &self.switches[slot.switch];
        EthernetRemoteId {
            slot: slot.slot_nr,
            module: module.module_nr.get(),
            port: port.port_nr.get(),
            vlan: port.vlan.get(),
            duid: switch.duid.clone(),
        }
    }

    /// Find the port a decoded Remote-ID maps to. VLAN 0 on a port is a
    /// wildcard; an exact VLAN match wins over the wildcard.
    pub fn lookup(&self, id: &EthernetRemoteId) -> Option<PortKey> {
        let mut wildcard = None;
        for (key, port) in &self.ports {
            let module = &self.modules[port.module];
            let slot = &self.slots[module.slot];
            let switch = &self.switches[slot.switch];
            if slot.slot_nr == id.slot
                && module.module_nr.get() == id.module
                && port.port_nr.get() == id.port
                && switch.duid.as_bytes() == id.duid.as_bytes()
            {
                if port.vlan.get() == id.vlan {
                    return Some(key);
                }
                if port.vlan.get() == 0 {
                    wildcard = Some(key);
                }
            }
        }
        wildcard
    }

    /// Module keys of a slot, ordered by module number.
    pub fn modules_of_slot(&self, slot: SlotKey) -> Vec<ModuleKey> {
        self.modules
            .iter()
            .filter(|(_, m)| m.slot == slot)
            .map(|(k, _)| k)
            .sorted_by_key(|&k| self.modules[k].module_nr)
            .collect()
    }
}

#[cfg(test)]
fn store_with_switch() -> (MappingStore, SwitchKey) {
    let mut store = MappingStore::default();
    let sw = store
        .add_switch("sw-lab-1".into(), Duid::new(vec![0, 3, 0, 1]))
        .expect("fresh store");
    (store, sw)
}

#[test]
fn test_bounded_fields() {
    assert_eq!(ModuleNr::new(3).map(ModuleNr::get), Ok(3));
    assert_eq!(
        ModuleNr::new(4),
        Err(RangeError {
            field: "module",
            max: 3,
            value: 4,
        })
    );
    assert!(PortNr::new(63).is_ok());
    assert!(PortNr::new(64).is_err());
    assert!(VlanId::new(4095).is_ok());
    assert!(VlanId::new(4096).is_err());
}

#[test]
fn test_dummy_module_auto_created() {
    let (mut store, sw) = store_with_switch();
    let slot = store.add_slot(sw, 2, false).expect("new slot");
    let modules = store.modules_of_slot(slot);
    assert_eq!(modules.len(), 1);
    assert_eq!(store.modules[modules[0]].module_nr.get(), 0);
    // Only the dummy module is allowed while has_modules is clear
    assert_eq!(
        store.add_module(slot, ModuleNr::new(1).expect("in range")),
        Err(MappingError::DummyModuleOnly)
    );
}

#[test]
fn test_has_modules_flag_rules() {
    let (mut store, sw) = store_with_switch();
    let slot = store.add_slot(sw, 0, true).expect("new slot");
    let m2 = ModuleNr::new(2).expect("in range");
    store.add_module(slot, m2).expect("first module");
    // A lone module gets renumbered to 0 when the flag is cleared
    assert_eq!(store.set_has_modules(slot, false), Ok(()));
    let modules = store.modules_of_slot(slot);
    assert_eq!(modules.len(), 1);
    assert_eq!(store.modules[modules[0]].module_nr.get(), 0);
    // With several modules the flag cannot be cleared
    store.set_has_modules(slot, true).expect("setting is free");
    store.add_module(slot, m2).expect("second module");
    assert_eq!(
        store.set_has_modules(slot, false),
        Err(MappingError::HasMultipleModules)
    );
}

#[test]
fn test_uniqueness() {
    let (mut store, sw) = store_with_switch();
    assert_eq!(
        store.add_switch("sw-lab-1".into(), Duid::default()),
        Err(MappingError::DuplicateSwitchName("sw-lab-1".into()))
    );
    store.add_slot(sw, 1, false).expect("new slot");
    assert_eq!(
        store.add_slot(sw, 1, true),
        Err(MappingError::DuplicateSlot(1))
    );
}

#[test]
fn test_port_label_and_wildcard_display() {
    let (mut store, sw) = store_with_switch();
    let slot = store.add_slot(sw, 2, false).expect("new slot");
    let module = store.modules_of_slot(slot)[0];
    let port = store
        .add_port(Port {
            module,
            port_nr: PortNr::new(3).expect("in range"),
            vlan: VlanId::default(),
            new_enterprise_number: 9,
            new_remote_id: b"lab".to_vec(),
        })
        .expect("new port");
    assert_eq!(store.port_label(port), "sw-lab-1 Port 2/3");
    store.ports[port].vlan = VlanId::new(100).expect("in range");
    assert_eq!(store.port_label(port), "sw-lab-1 Port 2/3 (VLAN 100)");
    // Modular slots show the module in the label
    store.set_has_modules(slot, true).expect("single module");
    store.modules[module].module_nr = ModuleNr::new(1).expect("in range");
    assert_eq!(store.port_label(port), "sw-lab-1 Port 2/1/3 (VLAN 100)");
}

#[test]
fn test_lookup_prefers_exact_vlan() {
    let (mut store, sw) = store_with_switch();
    let slot = store.add_slot(sw, 2, false).expect("new slot");
    let module = store.modules_of_slot(slot)[0];
    let mk_port = |vlan| Port {
        module,
        port_nr: PortNr::new(3).expect("in range"),
        vlan: VlanId::new(vlan).expect("in range"),
        new_enterprise_number: 0,
        new_remote_id: Vec::new(),
    };
    let wildcard = store.add_port(mk_port(0)).expect("wildcard port");
    let exact = store.add_port(mk_port(100)).expect("tagged port");
    let mut id = store.port_remote_id(exact);
    assert_eq!(store.lookup(&id), Some(exact));
    // Any other VLAN falls through to the wildcard entry
    id.vlan = 200;
    assert_eq!(store.lookup(&id), Some(wildcard));
    // A different switch DUID does not match at all
    id.duid = Duid::new(vec![9, 9]);
    assert_eq!(store.lookup(&id), None);
}

#[test]
fn test_remove_cascades() {
    let (mut store, sw) = store_with_switch();
    let slot = store.add_slot(sw, 2, false).expect("new slot");
    let module = store.modules_of_slot(slot)[0];
    store
        .add_port(Port {
            module,
            port_nr: PortNr::default(),
            vlan: VlanId::default(),
            new_enterprise_number: 0,
            new_remote_id: Vec::new(),
        })
        .expect("new port");
    store.remove_switch(sw);
    assert!(store.switches.is_empty());
    assert!(store.slots.is_empty());
    assert!(store.modules.is_empty());
    assert!(store.ports.is_empty());
}
