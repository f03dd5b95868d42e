//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into our arena tree.

use hinge_dom::{Document, DomError, DomTree, NodeId, Url};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);
        let url = Url::parse(url).map_err(DomError::from)?;

        let dom = Self::read(html)?;
        let mut document = Document::empty(url);
        Self::convert_children(&dom.document, document.tree_mut(), NodeId::ROOT)?;
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Parse `html` in a body context and append the result to `parent`.
    ///
    /// Each top-level node is built detached and then appended, so an
    /// observer sees one child-list record per inserted root.
    pub fn insert_fragment(
        &self,
        document: &mut Document,
        parent: NodeId,
        html: &str,
    ) -> Result<Vec<NodeId>, ParseError> {
        let dom = Self::read(html)?;
        let Some(body) = Self::find_body(&dom.document) else {
            return Ok(Vec::new());
        };

        let tree = document.tree_mut();
        let mut inserted = Vec::new();
        for child in body.children.borrow().iter() {
            if let Some(id) = Self::convert_node(child, tree)? {
                tree.append_child(parent, id)?;
                inserted.push(id);
            }
        }
        tracing::debug!("Inserted {} fragment roots under {}", inserted.len(), parent);
        Ok(inserted)
    }

    fn read(html: &str) -> Result<RcDom, ParseError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;
        Ok(dom)
    }

    fn find_body(document: &Handle) -> Option<Handle> {
        let is_element = |handle: &Handle, tag: &str| {
            matches!(&handle.data, RcNodeData::Element { name, .. } if &*name.local == tag)
        };
        let html = document
            .children
            .borrow()
            .iter()
            .find(|h| is_element(h, "html"))
            .cloned()?;
        let body = html
            .children
            .borrow()
            .iter()
            .find(|h| is_element(h, "body"))
            .cloned();
        body
    }

    fn convert_children(handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), DomError> {
        for child in handle.children.borrow().iter() {
            if let Some(id) = Self::convert_node(child, tree)? {
                tree.append_child(parent, id)?;
            }
        }
        Ok(())
    }

    /// Convert an RcDom node into a detached subtree
    fn convert_node(handle: &Handle, tree: &mut DomTree) -> Result<Option<NodeId>, DomError> {
        let id = match &handle.data {
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if text.trim().is_empty() {
                    return Ok(None);
                }
                tree.create_text(&text)
            }
            RcNodeData::Comment { contents } => tree.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    tree.set_attribute(id, &attr.name.local, &attr.value);
                }
                Self::convert_children(handle, tree, id)?;
                id
            }
            RcNodeData::Document
            | RcNodeData::Doctype { .. }
            | RcNodeData::ProcessingInstruction { .. } => return Ok(None),
        };
        Ok(Some(id))
    }
}
