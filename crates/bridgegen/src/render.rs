//! Bridge source rendering.

use serde::Serialize;
use tera::{Context, Tera};

use crate::{Interface, Method, Result};

const HEADER_TEMPLATE: &str = include_str!("../templates/bridge.h.tera");
const SOURCE_TEMPLATE: &str = include_str!("../templates/bridge.cpp.tera");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Appended to the interface name to form the bridge name.
    pub suffix:           String,
    /// Prepended to the bridge name to form the factory function name.
    pub factory_prefix:   String,
    /// Include path of the interface header, as written in the source file.
    pub interface_header: String,
}

impl RenderOptions {
    pub fn new(interface_header: impl Into<String>) -> Self {
        Self {
            suffix:           "Bridge".to_string(),
            factory_prefix:   "make".to_string(),
            interface_header: interface_header.into(),
        }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn factory_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.factory_prefix = prefix.into();
        self
    }
}

/// Rendered bridge files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    pub name:   String,
    pub header: String,
    pub source: String,
}

#[derive(Serialize)]
struct BridgeView<'a> {
    keyword:          &'a str,
    class_name:       &'a str,
    bridge_name:      &'a str,
    factory_name:     String,
    interface_header: &'a str,
    methods:          Vec<MethodView<'a>>,
}

#[derive(Serialize)]
struct MethodView<'a> {
    return_type:        &'a str,
    name:               &'a str,
    declaration_params: String,
    definition_params:  String,
    arg_names:          String,
    is_const:           bool,
    returns_value:      bool,
}

impl<'a> From<&'a Method> for MethodView<'a> {
    fn from(m: &'a Method) -> Self {
        Self {
            return_type:        &m.return_type,
            name:               &m.name,
            declaration_params: m.declaration_params(),
            definition_params:  m.definition_params(),
            arg_names:          m.arg_names(),
            is_const:           m.is_const,
            returns_value:      m.returns_value(),
        }
    }
}

pub fn render(iface: &Interface, options: &RenderOptions) -> Result<Bridge> {
    let bridge_name = format!("{}{}", iface.name, options.suffix);
    let view = BridgeView {
        keyword:          &iface.keyword,
        class_name:       &iface.name,
        bridge_name:      &bridge_name,
        factory_name:     format!("{}{}", options.factory_prefix, bridge_name),
        interface_header: &options.interface_header,
        methods:          iface.methods.iter().map(MethodView::from).collect(),
    };

    let mut tera = Tera::default();
    tera.add_raw_templates([("bridge.h", HEADER_TEMPLATE), ("bridge.cpp", SOURCE_TEMPLATE)])?;
    let ctx = Context::from_serialize(&view)?;

    Ok(Bridge {
        header: tera.render("bridge.h", &ctx)?,
        source: tera.render("bridge.cpp", &ctx)?,
        name:   bridge_name,
    })
}
