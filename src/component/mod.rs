use crate::{Name, Property, Value};

/// A `BEGIN:`/`END:` delimited block such as `VEVENT` or `VTIMEZONE`.
///
/// Components own their properties and child components. Attached children
/// are copied, later changes to the original don't show up in the parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    name: Name,
    properties: Vec<Property>,
    components: Vec<Component>,
}

impl Component {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<Name>) {
        self.name = name.into();
    }

    #[inline]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of direct child components
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// First property with the given name, compared case-insensitively
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|prop| prop.name().matches(name))
    }

    /// Append a property without parameters
    pub fn add(&mut self, name: impl Into<Name>, value: impl Into<Value>) {
        self.properties.push(Property::new(name, value));
    }

    /// Like [`Component::add`], but replaces all properties of the same name.
    ///
    /// The new property takes the position of the first one replaced.
    pub fn set(&mut self, name: impl Into<Name>, value: impl Into<Value>) {
        let prop = Property::new(name, value);
        let Some(pos) = self
            .properties
            .iter()
            .position(|other| other.name().matches(prop.name()))
        else {
            self.properties.push(prop);
            return;
        };
        self.properties
            .retain(|other| !other.name().matches(prop.name()));
        self.properties.insert(pos, prop);
    }

    #[inline]
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Attach a copy of `component` as child
    pub fn add_component(&mut self, component: &Component) {
        self.components.push(component.clone());
    }
}
