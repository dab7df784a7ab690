use serde::Deserialize;
use serde_json::Value;

/// Callback receiving the identity of the entity behind a clicked point.
type EntityCallback = Box<dyn FnMut(&str) + Send>;

/// Click event as emitted by the rendering capability.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointEvent {
    #[serde(default)]
    pub points: Vec<EventPoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPoint {
    #[serde(default)]
    pub customdata: Option<Value>,
}

impl PointEvent {
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            points: vec![EventPoint {
                customdata: Some(Value::String(payload.into())),
            }],
        }
    }

    /// Payload of the first activated point, if it carries one.
    pub fn payload(&self) -> Option<String> {
        let data = self.points.first()?.customdata.as_ref()?;
        match data {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Handle to a chart drawn into a target, holding its click bindings.
pub struct RenderedChart {
    target: String,
    on_select: Vec<EntityCallback>,
}

impl RenderedChart {
    pub(crate) fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            on_select: Vec::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Routes an interaction event to the bound callbacks.
    ///
    /// Returns the identity that was dispatched, or `None` when the event
    /// had no usable payload.
    pub fn dispatch_click(&mut self, event: &PointEvent) -> Option<String> {
        let identity = event.payload()?;
        for callback in self.on_select.iter_mut() {
            callback(identity.as_str());
        }
        Some(identity)
    }
}

impl std::fmt::Debug for RenderedChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedChart")
            .field("target", &self.target)
            .field("bindings", &self.on_select.len())
            .finish()
    }
}

/// Registers `on_entity_selected` for clicks on `chart`.
pub fn bind_click<F>(chart: &mut RenderedChart, on_entity_selected: F)
where
    F: FnMut(&str) + Send + 'static,
{
    chart.on_select.push(Box::new(on_entity_selected));
}
