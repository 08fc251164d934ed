use crate::application::{ApplicationDefinition, ApplicationWidget};
use crate::error::MigrationError;
use crate::monitor::{MonitorDefinition, MonitorWidget, MonitorWidgetType};
use ahash::AHashMap;
use tracing::{debug, info};

pub mod annotations;
pub mod geometry;
pub mod grouping;
mod mapping;
pub mod refs;

use mapping::map_widget;
use refs::{RandomRefIds, RefIdGenerator, RefIdSession};

/// Converts Monitor dashboard definitions into application definitions.
///
/// A `Converter` holds no per-conversion state and can be shared across
/// threads; style reference ids are only guaranteed unique within a single
/// call to [`Converter::convert`].
pub struct Converter {
    ref_ids: Box<dyn RefIdGenerator>,
    aliases: AHashMap<String, MonitorWidgetType>,
}

pub struct ConverterBuilder {
    ref_ids: Box<dyn RefIdGenerator>,
    aliases: AHashMap<String, MonitorWidgetType>,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self {
            ref_ids: Box::new(RandomRefIds),
            aliases: AHashMap::new(),
        }
    }

    /// Replaces the source of bar chart style reference ids.
    pub fn with_ref_id_generator(mut self, generator: Box<dyn RefIdGenerator>) -> Self {
        self.ref_ids = generator;
        self
    }

    /// Treats widgets tagged `tag` as `widget_type`. Tags the converter
    /// already recognizes are left alone.
    pub fn with_type_alias(mut self, tag: &str, widget_type: MonitorWidgetType) -> Self {
        if MonitorWidgetType::from_tag(tag).is_none() {
            self.aliases.insert(tag.to_string(), widget_type);
        }
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            ref_ids: self.ref_ids,
            aliases: self.aliases,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        ConverterBuilder::new().build()
    }
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// Converts every widget in order. Fails as a whole if any widget fails;
    /// no partial definition is returned.
    pub fn convert(
        &self,
        definition: &MonitorDefinition,
    ) -> Result<ApplicationDefinition, MigrationError> {
        let mut refs = RefIdSession::new(self.ref_ids.as_ref());

        let widgets = definition
            .widgets
            .iter()
            .enumerate()
            .map(|(index, widget)| self.convert_widget(index, widget, &mut refs))
            .collect::<Result<Vec<_>, _>>()?;

        info!(widgets = widgets.len(), "converted Monitor dashboard");
        Ok(ApplicationDefinition { widgets })
    }

    fn convert_widget(
        &self,
        index: usize,
        widget: &MonitorWidget,
        refs: &mut RefIdSession<'_>,
    ) -> Result<ApplicationWidget, MigrationError> {
        let widget_type = self.resolve_type(&widget.widget_type);
        let geometry = geometry::to_app_geometry(widget.x, widget.y, widget.width, widget.height);
        let mapped = map_widget(index, widget, widget_type, refs)?;

        debug!(
            index,
            from = %widget.widget_type,
            to = %mapped.widget_type,
            assets = mapped.properties.query_config().query.assets.len(),
            "converted widget"
        );

        Ok(ApplicationWidget {
            widget_type: mapped.widget_type,
            geometry,
            properties: mapped.properties,
        })
    }

    fn resolve_type<'a>(&'a self, widget_type: &'a MonitorWidgetType) -> &'a MonitorWidgetType {
        match widget_type {
            MonitorWidgetType::Unrecognized(tag) => self.aliases.get(tag).unwrap_or(widget_type),
            known => known,
        }
    }
}

/// Converts a definition with the default converter.
pub fn convert(definition: &MonitorDefinition) -> Result<ApplicationDefinition, MigrationError> {
    Converter::default().convert(definition)
}
