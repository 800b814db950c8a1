//! In-memory page the widgets render into.
//!
//! Elements are addressed by id, carry classes and attributes like their
//! markup counterparts, and are mutated only through `DomCommand`s.

use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetFavicon {
        data_url: String,
    },
    SetInputValue {
        id: String,
        value: String,
    },
    SetItems {
        id: String,
        items: Vec<String>,
        loading: bool,
    },
    SetButton {
        id: String,
        label: String,
        disabled: bool,
    },
    SetVisibility {
        id: String,
        visible: bool,
    },
    ShowBanner {
        container: String,
        class: &'static str,
        message: String,
    },
    ClearBanners {
        container: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub class: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub label: String,
    pub value: String,
    pub items: Vec<String>,
    pub loading: bool,
    pub hidden: bool,
    pub disabled: bool,
    pub banners: Vec<Banner>,
}

impl Element {
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    favicon: Option<String>,
    elements: BTreeMap<String, Element>,
    order: Vec<String>,
}

impl Page {
    pub fn insert(&mut self, id: &str, element: Element) {
        if self.elements.insert(id.to_string(), element).is_none() {
            self.order.push(id.to_string());
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    /// Elements carrying `class`, in document order.
    pub fn by_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Element)> + 'a {
        self.order.iter().filter_map(move |id| {
            let element = self.elements.get(id)?;
            element.has_class(class).then_some((id.as_str(), element))
        })
    }

    /// Applies a command; commands addressing unknown ids are ignored, as a
    /// missing element is on a real page.
    pub fn apply(&mut self, command: DomCommand) {
        match command {
            DomCommand::SetFavicon { data_url } => self.favicon = Some(data_url),
            DomCommand::SetInputValue { id, value } => {
                if let Some(element) = self.elements.get_mut(&id) {
                    element.value = value;
                }
            }
            DomCommand::SetItems { id, items, loading } => {
                if let Some(element) = self.elements.get_mut(&id) {
                    element.items = items;
                    element.loading = loading;
                }
            }
            DomCommand::SetButton {
                id,
                label,
                disabled,
            } => {
                if let Some(element) = self.elements.get_mut(&id) {
                    element.label = label;
                    element.disabled = disabled;
                }
            }
            DomCommand::SetVisibility { id, visible } => {
                if let Some(element) = self.elements.get_mut(&id) {
                    element.hidden = !visible;
                }
            }
            DomCommand::ShowBanner {
                container,
                class,
                message,
            } => {
                if let Some(element) = self.elements.get_mut(&container) {
                    element.banners.push(Banner { class, message });
                }
            }
            DomCommand::ClearBanners { container } => {
                if let Some(element) = self.elements.get_mut(&container) {
                    element.banners.clear();
                }
            }
        }
    }

    /// Plain-text rendering for the console front end.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.favicon().is_some() {
            let _ = writeln!(out, "[icon installed]");
        }
        for id in &self.order {
            let Some(element) = self.elements.get(id) else {
                continue;
            };
            if element.hidden {
                let _ = writeln!(out, "#{id} (hidden)");
                continue;
            }
            let _ = write!(out, "#{id}");
            if !element.label.is_empty() {
                let _ = write!(out, " [{}]", element.label);
            }
            if element.disabled {
                let _ = write!(out, " (disabled)");
            }
            if !element.value.is_empty() {
                let _ = write!(out, " = {:?}", element.value);
            }
            if element.loading {
                let _ = write!(out, " loading...");
            }
            let _ = writeln!(out);
            for item in &element.items {
                let _ = writeln!(out, "  - {item}");
            }
            for banner in &element.banners {
                let _ = writeln!(out, "  <{}> {}", banner.class, banner.message);
            }
        }
        out
    }
}
