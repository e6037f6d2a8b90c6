//! The object model (C6): a tagged-variant AST.
//!
//! Grounded in `examples/original_source/src/model/oom.py` (`Literal`,
//! `Variable`, `SetUnitTime`/`SetUnitLength`/`SetUnitAngle`/`SetTimeStart`,
//! `Configuration`, `Attack`, `Scenario`). Per the Design Notes, each variant
//! exposes an explicit `attributes()` descriptor instead of the original's
//! runtime `__dict__` walk, so the serializer (C8) never matches on concrete
//! model types and hidden fields are a declared property rather than a
//! `_`-prefix naming convention.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Literal {
    pub identifier: String,
    pub type_name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Variable {
    pub identifier: String,
    pub type_name: String,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SetUnitTime {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SetUnitLength {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SetUnitAngle {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SetTimeStart {
    pub reference: String,
}

/// One configuration action. Kept as its own sum type (rather than folding
/// straight into `Node`) so `Configuration::actions` and the current-scope
/// staging buffer (C5) can hold a narrower type than the full model.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Action {
    SetUnitTime(SetUnitTime),
    SetUnitLength(SetUnitLength),
    SetUnitAngle(SetUnitAngle),
    SetTimeStart(SetTimeStart),
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Configuration {
    pub actions: Vec<Action>,
}

/// Reserved for future work; the original's `attack` grammar is a stub and
/// this translation only goes as far as parsing variable declarations
/// inside the block (for shadowing/scope effects) without attaching any
/// attributes to the node itself.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Attack {}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Scenario {
    pub configuration: Option<Configuration>,
    pub attack: Option<Attack>,
}

/// Any node in the tree, used by the serializer to walk without matching on
/// concrete model types.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Literal),
    Variable(Variable),
    SetUnitTime(SetUnitTime),
    SetUnitLength(SetUnitLength),
    SetUnitAngle(SetUnitAngle),
    SetTimeStart(SetTimeStart),
    Configuration(Configuration),
    Attack(Attack),
    Scenario(Scenario),
}

impl From<Action> for Node {
    fn from(action: Action) -> Self {
        match action {
            Action::SetUnitTime(a) => Node::SetUnitTime(a),
            Action::SetUnitLength(a) => Node::SetUnitLength(a),
            Action::SetUnitAngle(a) => Node::SetUnitAngle(a),
            Action::SetTimeStart(a) => Node::SetTimeStart(a),
        }
    }
}

/// A named attribute of a model node, carrying enough shape information for
/// the serializer to render `entity`/`type`/`length`/`index` without
/// inspecting the node itself.
pub struct Attribute {
    pub name: &'static str,
    pub value: AttributeValue,
    /// An explicit per-attribute decision, replacing the original's
    /// `_`-prefix sniffing convention. Nothing in this model currently hides
    /// an attribute, but the contract is carried so a future variant can.
    pub is_hidden: bool,
}

pub enum AttributeValue {
    Primitive { type_name: &'static str, rendered: String },
    Sequence { type_name: &'static str, items: Vec<Node> },
    Object { type_name: &'static str, node: Box<Node> },
    /// A `None`/absent value; still rendered with its declared type, never
    /// simply omitted (`spec.md` §6: "every attribute is rendered even if
    /// its value is null").
    Empty { type_name: &'static str },
}

impl Attribute {
    fn primitive(name: &'static str, type_name: &'static str, rendered: String) -> Attribute {
        Attribute { name, value: AttributeValue::Primitive { type_name, rendered }, is_hidden: false }
    }

    fn option_primitive(name: &'static str, type_name: &'static str, value: Option<String>) -> Attribute {
        match value {
            Some(rendered) => Attribute::primitive(name, type_name, rendered),
            None => Attribute { name, value: AttributeValue::Empty { type_name }, is_hidden: false },
        }
    }

    fn sequence(name: &'static str, type_name: &'static str, items: Vec<Node>) -> Attribute {
        Attribute { name, value: AttributeValue::Sequence { type_name, items }, is_hidden: false }
    }

    fn option_object(name: &'static str, type_name: &'static str, node: Option<Node>) -> Attribute {
        match node {
            Some(node) => {
                let type_name = node.class_name();
                Attribute { name, value: AttributeValue::Object { type_name, node: Box::new(node) }, is_hidden: false }
            }
            None => Attribute { name, value: AttributeValue::Empty { type_name }, is_hidden: false },
        }
    }
}

impl Node {
    pub fn class_name(&self) -> &'static str {
        match self {
            Node::Literal(_) => "Literal",
            Node::Variable(_) => "Variable",
            Node::SetUnitTime(_) => "SetUnitTime",
            Node::SetUnitLength(_) => "SetUnitLength",
            Node::SetUnitAngle(_) => "SetUnitAngle",
            Node::SetTimeStart(_) => "SetTimeStart",
            Node::Configuration(_) => "Configuration",
            Node::Attack(_) => "Attack",
            Node::Scenario(_) => "Scenario",
        }
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        match self {
            Node::Literal(l) => vec![
                Attribute::primitive("identifier", "str", l.identifier.clone()),
                Attribute::primitive("type", "str", l.type_name.clone()),
                Attribute::primitive("value", "str", l.value.clone()),
            ],
            Node::Variable(v) => vec![
                Attribute::primitive("identifier", "str", v.identifier.clone()),
                Attribute::primitive("type", "str", v.type_name.clone()),
                Attribute::option_primitive("reference", "str", v.reference.clone()),
            ],
            Node::SetUnitTime(s) => vec![Attribute::primitive("reference", "str", s.reference.clone())],
            Node::SetUnitLength(s) => vec![Attribute::primitive("reference", "str", s.reference.clone())],
            Node::SetUnitAngle(s) => vec![Attribute::primitive("reference", "str", s.reference.clone())],
            Node::SetTimeStart(s) => vec![Attribute::primitive("reference", "str", s.reference.clone())],
            Node::Configuration(c) => {
                let items = c.actions.iter().cloned().map(Node::from).collect();
                vec![Attribute::sequence("actions", "list", items)]
            }
            Node::Attack(_) => vec![],
            Node::Scenario(s) => vec![
                Attribute::option_object("configuration", "Configuration", s.configuration.clone().map(Node::Configuration)),
                Attribute::option_object("attack", "Attack", s.attack.clone().map(Node::Attack)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_with_no_blocks_has_both_attributes_empty() {
        let scenario = Scenario::default();
        let node = Node::Scenario(scenario);
        let attrs = node.attributes();
        assert_eq!(attrs.len(), 2);
        assert!(attrs.iter().all(|a| matches!(a.value, AttributeValue::Empty { .. })));
    }

    #[test]
    fn configuration_actions_preserve_order() {
        let configuration = Configuration {
            actions: vec![
                Action::SetUnitTime(SetUnitTime { reference: "_s".into() }),
                Action::SetTimeStart(SetTimeStart { reference: "_0".into() }),
            ],
        };
        let node = Node::Configuration(configuration);
        let attrs = node.attributes();
        match &attrs[0].value {
            AttributeValue::Sequence { items, .. } => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].class_name(), "SetUnitTime");
                assert_eq!(items[1].class_name(), "SetTimeStart");
            }
            _ => panic!("expected a sequence"),
        }
    }

    #[test]
    fn attack_placeholder_has_no_attributes() {
        assert!(Node::Attack(Attack::default()).attributes().is_empty());
    }
}
