//! iCalendar component types (RFC 5545 §3.4, §3.6).

use super::{Property, names};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// X- or IANA component this crate has no special knowledge of.
    Other,
}

impl ComponentKind {
    /// Returns the canonical component name, or `None` for [`Self::Other`].
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        Some(match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Other => return None,
        })
    }

    /// Maps a component name (case-insensitive) to its kind.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VJOURNAL" => Self::Journal,
            "VFREEBUSY" => Self::FreeBusy,
            "VTIMEZONE" => Self::Timezone,
            "VALARM" => Self::Alarm,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str().unwrap_or("X-COMPONENT"))
    }
}

/// An iCalendar component with its properties and nested sub-components.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Component name as written in the source (uppercased).
    pub name: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components in order of appearance.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates an empty component from its name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_uppercase();
        Self {
            kind: ComponentKind::parse(&name),
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn calendar() -> Self {
        Self::named("VCALENDAR")
    }

    #[must_use]
    pub fn event() -> Self {
        Self::named("VEVENT")
    }

    #[must_use]
    pub fn todo() -> Self {
        Self::named("VTODO")
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the UID property value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID)?.as_text()
    }

    /// Returns the SUMMARY property value if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property(names::SUMMARY)?.as_text()
    }

    /// Returns children of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// Iterates over this component and all of its descendants, depth first,
    /// parents before children.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Component::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a Component>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// Top-level iCalendar object wrapping the VCALENDAR component.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Creates an iCalendar with VERSION and PRODID set.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut ical = Self::empty();
        ical.root.add_property(Property::text(names::VERSION, "2.0"));
        ical.root.add_property(Property::text(names::PRODID, prodid));
        ical
    }

    /// Creates a VCALENDAR without any properties or components.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Component::calendar(),
        }
    }

    /// Returns a calendar-level property (PRODID, VERSION, ...).
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.root.get_property(name)
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.property(names::PRODID)?.as_text()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.property(names::VERSION)?.as_text()
    }

    /// Appends a top-level component (VEVENT, VTODO, VTIMEZONE, ...).
    pub fn add_component(&mut self, component: Component) {
        self.root.add_child(component);
    }

    /// Returns the top-level components in document order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.root.children
    }

    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Event)
    }

    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Todo)
    }

    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Timezone)
    }

    #[must_use]
    pub fn freebusy(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::FreeBusy)
    }
}
