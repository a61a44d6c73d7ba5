//! Control blending: descriptors sharing a display label collapse into one
//! composite control.
//!
//! ```text
//!   [ Communication Type (tags) ]          [ Communication Type (tags)      ]
//!   [ Partners (tags)           ]   ==>    [ Partners (composite)           ]
//!   [ Partners (search_select)  ]          [   "partner_tags+partner"       ]
//! ```
//!
//! Output order is the order in which each distinct label first appears.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::warn;

use crate::types::{FilterInterfaceDescriptor, InterfaceType};

/// Merge descriptors that share a `display` label.
///
/// Singletons pass through unchanged. Each group of two or more becomes a
/// single composite emitted where the group's first member stood; its
/// `filter` joins the member keys with `+` in input order.
pub fn blend_controls(controls: &[FilterInterfaceDescriptor]) -> Vec<FilterInterfaceDescriptor> {
    let mut groups: HashMap<&str, Vec<&FilterInterfaceDescriptor>> = HashMap::new();
    for control in controls {
        groups.entry(control.display.as_str()).or_default().push(control);
    }

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut blended = Vec::with_capacity(groups.len());

    for control in controls {
        let display = control.display.as_str();
        let members = &groups[display];

        if members.len() == 1 {
            blended.push(control.clone());
        } else if emitted.insert(display) {
            blended.push(composite(display, members));
        }
    }

    blended
}

fn composite(label: &str, members: &[&FilterInterfaceDescriptor]) -> FilterInterfaceDescriptor {
    let filter = members
        .iter()
        .map(|m| m.filter.as_str())
        .collect::<Vec<_>>()
        .join("+");

    let mut interfaces: BTreeMap<InterfaceType, FilterInterfaceDescriptor> = BTreeMap::new();
    for member in members {
        if let Some(previous) = interfaces.insert(member.interface_type, (*member).clone()) {
            warn!(
                label,
                interface_type = member.interface_type.as_str(),
                replaced = %previous.filter,
                "two controls share a display label and interface type; keeping the later one"
            );
        }
    }

    FilterInterfaceDescriptor {
        filter,
        interface_type: InterfaceType::Composite,
        display: label.to_string(),
        interfaces: Some(interfaces),
    }
}
