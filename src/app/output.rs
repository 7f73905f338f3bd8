// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/output.rs
//
// Change notifications and mirrored numeric fields.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::domain::CropRegion;

/// Emitted after every geometry change, in native pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropChange {
    pub region: CropRegion,
}

impl CropChange {
    pub fn field(&self, role: FieldRole) -> u32 {
        match role {
            FieldRole::X => self.region.x,
            FieldRole::Y => self.region.y,
            FieldRole::Width => self.region.width,
            FieldRole::Height => self.region.height,
        }
    }
}

impl fmt::Display for CropChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.region, f)
    }
}

/// Role tag of a mirrored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldRole {
    X,
    Y,
    Width,
    Height,
}

impl FieldRole {
    pub const ALL: [FieldRole; 4] = [FieldRole::X, FieldRole::Y, FieldRole::Width, FieldRole::Height];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldRole::X => "x",
            FieldRole::Y => "y",
            FieldRole::Width => "width",
            FieldRole::Height => "height",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

/// An input-like field the widget writes decimal strings into.
pub trait FieldSink {
    fn set_value(&mut self, value: &str);
}

/// Shared text buffer; clone it, hand one copy to the widget, read the other.
#[derive(Debug, Clone, Default)]
pub struct TextField(Rc<RefCell<String>>);

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.0.borrow().clone()
    }
}

impl FieldSink for TextField {
    fn set_value(&mut self, value: &str) {
        let mut text = self.0.borrow_mut();
        text.clear();
        text.push_str(value);
    }
}

type Listener = Box<dyn FnMut(&CropChange)>;

/// Fans a native region out to listeners and field sinks.
#[derive(Default)]
pub struct OutputAdapter {
    fields: BTreeMap<FieldRole, Box<dyn FieldSink>>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for OutputAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputAdapter")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl OutputAdapter {
    /// Attach a sink for one role, replacing any previous one.
    pub fn set_field(&mut self, role: FieldRole, sink: Box<dyn FieldSink>) {
        self.fields.insert(role, sink);
    }

    pub fn remove_field(&mut self, role: FieldRole) {
        self.fields.remove(&role);
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn publish(&mut self, region: CropRegion) -> CropChange {
        let change = CropChange { region };
        log::debug!("crop changed: {change}");

        for (role, sink) in &mut self.fields {
            sink.set_value(&change.field(*role).to_string());
        }
        for listener in &mut self.listeners {
            listener(&change);
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_role_names_round_trip() {
        for role in FieldRole::ALL {
            assert_eq!(FieldRole::from_name(role.as_str()), Some(role));
        }
        assert_eq!(FieldRole::from_name("depth"), None);
    }

    #[test]
    fn publish_writes_fields_and_notifies() {
        let mut adapter = OutputAdapter::default();
        let x = TextField::new();
        let height = TextField::new();
        adapter.set_field(FieldRole::X, Box::new(x.clone()));
        adapter.set_field(FieldRole::Height, Box::new(height.clone()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        adapter.add_listener(Box::new(move |change| sink.borrow_mut().push(*change)));

        let change = adapter.publish(CropRegion::new(12, 3, 40, 40));

        assert_eq!(x.value(), "12");
        assert_eq!(height.value(), "40");
        assert_eq!(seen.borrow().as_slice(), &[change]);
        assert_eq!(change.field(FieldRole::Y), 3);
    }

    #[test]
    fn removed_field_is_left_alone() {
        let mut adapter = OutputAdapter::default();
        let width = TextField::new();
        adapter.set_field(FieldRole::Width, Box::new(width.clone()));
        adapter.publish(CropRegion::new(0, 0, 5, 5));
        adapter.remove_field(FieldRole::Width);
        adapter.publish(CropRegion::new(0, 0, 9, 9));
        assert_eq!(width.value(), "5");
    }
}
