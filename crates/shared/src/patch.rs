//! Типизированный патч элемента
//!
//! Скалярные поля заменяются целиком, `position` и `size` сливаются по ключам.

use crate::{Element, ElementKind, Props};
use serde::{Deserialize, Serialize};

/// Частичное обновление позиции
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl PositionPatch {
    pub fn to(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Частичное обновление размера
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl SizePatch {
    pub fn to(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Размер должен оставаться конечным и > 0
pub(crate) fn valid_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Патч элемента. `id` не изменяется.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    /// Замена типа
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ElementKind>,
    /// Слияние по ключам
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionPatch>,
    /// Слияние по ключам; неположительные значения игнорируются
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizePatch>,
    /// Замена
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Замена всего словаря
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
    /// Замена
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
}

impl ElementPatch {
    /// Патч, перемещающий элемент в абсолютную позицию
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            position: Some(PositionPatch::to(x, y)),
            ..Self::default()
        }
    }

    /// Патч, задающий абсолютный размер
    pub fn resize_to(width: f64, height: f64) -> Self {
        Self {
            size: Some(SizePatch::to(width, height)),
            ..Self::default()
        }
    }

    /// Нет ни одного изменяемого поля
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.position.map_or(true, |p| p.is_empty())
            && self.size.map_or(true, |s| s.is_empty())
            && self.rotation.is_none()
            && self.props.is_none()
            && self.z_index.is_none()
    }

    /// Применить патч к элементу
    pub fn apply(&self, element: &mut Element) {
        if let Some(kind) = self.kind {
            element.kind = kind;
        }
        if let Some(position) = self.position {
            if let Some(x) = position.x {
                element.position.x = x;
            }
            if let Some(y) = position.y {
                element.position.y = y;
            }
        }
        if let Some(size) = self.size {
            if let Some(width) = size.width.filter(|w| valid_extent(*w)) {
                element.size.width = width;
            }
            if let Some(height) = size.height.filter(|h| valid_extent(*h)) {
                element.size.height = height;
            }
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(props) = &self.props {
            element.props = props.clone();
        }
        if let Some(z_index) = self.z_index {
            element.z_index = z_index;
        }
    }
}
