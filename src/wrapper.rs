//! Class names and HTML attributes of a banner's wrapper element.
//!
//! The computed values can be adjusted by registered hooks. Hooks run in
//! registration order after the built-in values are set, and each one sees the
//! result of the hooks before it.

use std::fmt;

use crate::banner::Banner;
use crate::constants::{ANIMATED_CLASS, COMPONENT_CLASS, WRAPPER_CLASS};

/// Ordered set of HTML attributes. Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `name="value"` pairs. Empty values are skipped.
    pub fn to_html(&self) -> String {
        self.iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!("{}=\"{}\"", name, escape_attribute(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub type AttributeHook = Box<dyn Fn(&Banner, &mut Attributes) + Send + Sync>;
pub type ClassNameHook = Box<dyn Fn(&Banner, &mut Vec<String>) + Send + Sync>;

/// Post-processing callbacks for wrapper class names and attributes.
#[derive(Default)]
pub struct WrapperHooks {
    class_names: Vec<ClassNameHook>,
    attributes: Vec<AttributeHook>,
}

impl fmt::Debug for WrapperHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperHooks")
            .field("class_names", &self.class_names.len())
            .field("attributes", &self.attributes.len())
            .finish()
    }
}

impl WrapperHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_class_names<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&Banner, &mut Vec<String>) + Send + Sync + 'static,
    {
        self.class_names.push(Box::new(hook));
        self
    }

    pub fn on_attributes<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&Banner, &mut Attributes) + Send + Sync + 'static,
    {
        self.attributes.push(Box::new(hook));
        self
    }

    pub fn wrapper_class_names(&self, banner: &Banner) -> Vec<String> {
        let mut classes = vec![WRAPPER_CLASS.to_string()];
        if banner.options.animate {
            classes.push(ANIMATED_CLASS.to_string());
            if let Some(class) = banner.options.animation_type.css_class() {
                classes.push(class.to_string());
            }
        }
        for hook in &self.class_names {
            hook(banner, &mut classes);
        }
        classes
    }

    pub fn wrapper_attributes(&self, banner: &Banner) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.set("id", banner.wrapper_id());
        attributes.set("class", self.wrapper_class_names(banner).join(" "));
        if let Some(seconds) = banner.options.cycle_seconds() {
            attributes.set("style", format!("animation-duration: {}s", seconds));
        }
        for hook in &self.attributes {
            hook(banner, &mut attributes);
        }
        attributes
    }

    pub fn wrapper_attributes_html(&self, banner: &Banner) -> String {
        self.wrapper_attributes(banner).to_html()
    }
}

/// Classes of the banner element itself.
pub fn component_class_names(banner: &Banner) -> Vec<String> {
    let mut classes = vec![COMPONENT_CLASS.to_string()];
    if banner.options.animate {
        classes.push(ANIMATED_CLASS.to_string());
    }
    classes
}
