//! In-memory mock driver for unit testing page objects.
//!
//! The mock DOM is an arena of nodes. Each node lists its children under the
//! locator that finds them, so a lookup is an exact `(parent, locator)` match
//! and selector syntax is never interpreted. Clicks are recorded and may
//! trigger [`ClickEffect`]s that mutate the DOM, which is enough to model
//! tab switches, option selection and navigation.
//!
//! # Example
//!
//! ```
//! use crashstats_pages::mock::{MockDriver, MockNode};
//! use crashstats_pages::{Driver, Element, Locator};
//!
//! let driver = MockDriver::new();
//! let row = driver.add(&Locator::css("tr"), MockNode::new().text("row"));
//! driver.append(row, &Locator::tag_name("td"), MockNode::new().text("1"));
//!
//! let rows = driver.find_all(&Locator::css("tr")).unwrap();
//! let cell = rows[0].find(&Locator::tag_name("td")).unwrap();
//! assert_eq!(cell.text().unwrap(), "1");
//! ```

use crate::driver::{Driver, Element};
use crate::locator::Locator;
use crate::result::{PageError, PageResult};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// Index of a node in the mock DOM
pub type NodeId = usize;

/// The document root; top-level lookups search its children
pub const ROOT: NodeId = 0;

/// Static description of a mock element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockNode {
    text: String,
    attributes: BTreeMap<String, String>,
    displayed: bool,
    selected: bool,
}

impl Default for MockNode {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNode {
    /// Create a visible, unselected node with no text
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::new(),
            attributes: BTreeMap::new(),
            displayed: true,
            selected: false,
        }
    }

    /// Set the visible text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark the node as not displayed
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.displayed = false;
        self
    }

    /// Mark the node as selected
    #[must_use]
    pub const fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// DOM mutation applied when a node is clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    /// Make a node displayed
    Show(NodeId),
    /// Make a node hidden
    Hide(NodeId),
    /// Mark a node selected
    Select(NodeId),
    /// Mark a node unselected
    Deselect(NodeId),
    /// Change the current URL
    Navigate(String),
    /// Open a native dialog
    OpenAlert,
}

#[derive(Debug)]
struct NodeData {
    node: MockNode,
    value: String,
    children: Vec<(Locator, NodeId)>,
    effects: Vec<ClickEffect>,
}

impl NodeData {
    fn new(node: MockNode) -> Self {
        Self {
            node,
            value: String::new(),
            children: Vec::new(),
            effects: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct DomState {
    nodes: Vec<NodeData>,
    current_url: String,
    alert_present: bool,
    script_results: HashMap<String, serde_json::Value>,
    failure: Option<String>,
    call_history: Vec<String>,
}

impl DomState {
    fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(MockNode::new())],
            current_url: String::new(),
            alert_present: false,
            script_results: HashMap::new(),
            failure: None,
            call_history: Vec::new(),
        }
    }

    fn check(&self) -> PageResult<()> {
        match &self.failure {
            Some(message) => Err(PageError::driver(message.clone())),
            None => Ok(()),
        }
    }

    fn children(&self, parent: NodeId, locator: &Locator) -> Vec<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .filter(|(l, _)| l == locator)
            .map(|(_, id)| *id)
            .collect()
    }

    fn apply(&mut self, effect: &ClickEffect) {
        match effect {
            ClickEffect::Show(id) => self.nodes[*id].node.displayed = true,
            ClickEffect::Hide(id) => self.nodes[*id].node.displayed = false,
            ClickEffect::Select(id) => self.nodes[*id].node.selected = true,
            ClickEffect::Deselect(id) => self.nodes[*id].node.selected = false,
            ClickEffect::Navigate(url) => self.current_url.clone_from(url),
            ClickEffect::OpenAlert => self.alert_present = true,
        }
    }
}

/// Mock driver for unit testing
#[derive(Debug, Clone)]
pub struct MockDriver {
    dom: Rc<RefCell<DomState>>,
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDriver {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            dom: Rc::new(RefCell::new(DomState::new())),
        }
    }

    /// Add a top-level node found by `locator`
    pub fn add(&self, locator: &Locator, node: MockNode) -> NodeId {
        self.append(ROOT, locator, node)
    }

    /// Add a child node under `parent`, found by `locator`
    pub fn append(&self, parent: NodeId, locator: &Locator, node: MockNode) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        let id = dom.nodes.len();
        dom.nodes.push(NodeData::new(node));
        dom.nodes[parent].children.push((locator.clone(), id));
        id
    }

    /// Register a DOM mutation for clicks on `node`
    pub fn on_click(&self, node: NodeId, effect: ClickEffect) {
        self.dom.borrow_mut().nodes[node].effects.push(effect);
    }

    /// Set whether a native dialog is open
    pub fn set_alert_present(&self, present: bool) {
        self.dom.borrow_mut().alert_present = present;
    }

    /// Set the value returned by `execute_script` for `script`
    pub fn set_script_result(&self, script: impl Into<String>, result: serde_json::Value) {
        let _ = self
            .dom
            .borrow_mut()
            .script_results
            .insert(script.into(), result);
    }

    /// Make every subsequent driver call fail with a driver error
    pub fn fail_with(&self, message: impl Into<String>) {
        self.dom.borrow_mut().failure = Some(message.into());
    }

    /// Current URL
    #[must_use]
    pub fn current_url(&self) -> String {
        self.dom.borrow().current_url.clone()
    }

    /// Text typed into a node since its last clear
    #[must_use]
    pub fn typed_value(&self, node: NodeId) -> String {
        self.dom.borrow().nodes[node].value.clone()
    }

    /// Whether a node is displayed
    #[must_use]
    pub fn is_displayed(&self, node: NodeId) -> bool {
        self.dom.borrow().nodes[node].node.displayed
    }

    /// Whether a node is selected
    #[must_use]
    pub fn is_selected(&self, node: NodeId) -> bool {
        self.dom.borrow().nodes[node].node.selected
    }

    /// Whether a node has been clicked
    #[must_use]
    pub fn was_clicked(&self, node: NodeId) -> bool {
        self.was_called(&format!("click:#{node}"))
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.dom.borrow().call_history.clone()
    }

    /// Check if a call starting with `prefix` was recorded
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.dom
            .borrow()
            .call_history
            .iter()
            .any(|c| c.starts_with(prefix))
    }

    fn element(&self, id: NodeId) -> MockElement {
        MockElement {
            dom: Rc::clone(&self.dom),
            id,
        }
    }
}

impl Driver for MockDriver {
    type Element = MockElement;

    fn navigate(&self, url: &str) -> PageResult<()> {
        let mut dom = self.dom.borrow_mut();
        dom.check()?;
        dom.call_history.push(format!("navigate:{url}"));
        dom.current_url = url.to_string();
        Ok(())
    }

    fn find(&self, locator: &Locator) -> PageResult<MockElement> {
        self.element(ROOT).find(locator)
    }

    fn find_all(&self, locator: &Locator) -> PageResult<Vec<MockElement>> {
        self.element(ROOT).find_all(locator)
    }

    fn execute_script(&self, script: &str) -> PageResult<serde_json::Value> {
        let mut dom = self.dom.borrow_mut();
        dom.check()?;
        dom.call_history.push(format!("execute_script:{script}"));
        dom.script_results
            .get(script)
            .cloned()
            .ok_or_else(|| PageError::driver(format!("No mock result for script: {script}")))
    }

    fn is_alert_present(&self) -> PageResult<bool> {
        let dom = self.dom.borrow();
        dom.check()?;
        Ok(dom.alert_present)
    }
}

/// Element handle into a [`MockDriver`] document
#[derive(Debug, Clone)]
pub struct MockElement {
    dom: Rc<RefCell<DomState>>,
    id: NodeId,
}

impl MockElement {
    /// Node id of this element
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    fn sibling(&self, id: NodeId) -> Self {
        Self {
            dom: Rc::clone(&self.dom),
            id,
        }
    }
}

impl Element for MockElement {
    fn find(&self, locator: &Locator) -> PageResult<Self> {
        let dom = self.dom.borrow();
        dom.check()?;
        dom.children(self.id, locator)
            .first()
            .map(|id| self.sibling(*id))
            .ok_or_else(|| PageError::not_found(locator))
    }

    fn find_all(&self, locator: &Locator) -> PageResult<Vec<Self>> {
        let dom = self.dom.borrow();
        dom.check()?;
        Ok(dom
            .children(self.id, locator)
            .into_iter()
            .map(|id| self.sibling(id))
            .collect())
    }

    fn click(&self) -> PageResult<()> {
        let mut dom = self.dom.borrow_mut();
        dom.check()?;
        dom.call_history.push(format!("click:#{}", self.id));
        let effects = dom.nodes[self.id].effects.clone();
        for effect in &effects {
            dom.apply(effect);
        }
        Ok(())
    }

    fn text(&self) -> PageResult<String> {
        let dom = self.dom.borrow();
        dom.check()?;
        Ok(dom.nodes[self.id].node.text.clone())
    }

    fn attribute(&self, name: &str) -> PageResult<Option<String>> {
        let dom = self.dom.borrow();
        dom.check()?;
        Ok(dom.nodes[self.id].node.attributes.get(name).cloned())
    }

    fn is_displayed(&self) -> PageResult<bool> {
        let dom = self.dom.borrow();
        dom.check()?;
        Ok(dom.nodes[self.id].node.displayed)
    }

    fn is_selected(&self) -> PageResult<bool> {
        let dom = self.dom.borrow();
        dom.check()?;
        Ok(dom.nodes[self.id].node.selected)
    }

    fn clear(&self) -> PageResult<()> {
        let mut dom = self.dom.borrow_mut();
        dom.check()?;
        dom.call_history.push(format!("clear:#{}", self.id));
        dom.nodes[self.id].value.clear();
        Ok(())
    }

    fn send_keys(&self, text: &str) -> PageResult<()> {
        let mut dom = self.dom.borrow_mut();
        dom.check()?;
        dom.call_history.push(format!("send_keys:#{}:{text}", self.id));
        dom.nodes[self.id].value.push_str(text);
        Ok(())
    }
}
