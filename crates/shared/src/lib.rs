use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod patch;

pub use patch::{ElementPatch, PositionPatch, SizePatch};

/// Уникальный идентификатор элемента в саду
pub type ElementId = String;

/// Произвольные свойства элемента (цвет, подпись и т.п.)
pub type Props = BTreeMap<String, serde_json::Value>;

/// Минимальный масштаб холста
pub const MIN_ZOOM: f64 = 0.2;
/// Максимальный масштаб холста
pub const MAX_ZOOM: f64 = 4.0;

/// Тип элемента сада
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Plant,
    Tree,
    Flower,
    Path,
    Water,
    #[default]
    Decor,
    Shape,
}

impl ElementKind {
    /// Отображаемое имя типа
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Plant => "Plant",
            ElementKind::Tree => "Tree",
            ElementKind::Flower => "Flower",
            ElementKind::Path => "Path",
            ElementKind::Water => "Water",
            ElementKind::Decor => "Decor",
            ElementKind::Shape => "Shape",
        }
    }

    /// Все типы элементов
    pub fn all() -> &'static [ElementKind] {
        &[
            ElementKind::Plant,
            ElementKind::Tree,
            ElementKind::Flower,
            ElementKind::Path,
            ElementKind::Water,
            ElementKind::Decor,
            ElementKind::Shape,
        ]
    }
}

/// Позиция левого верхнего угла на холсте
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Размер элемента (всегда > 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Обе стороны конечны и > 0
    pub fn is_valid(&self) -> bool {
        patch::valid_extent(self.width) && patch::valid_extent(self.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 48.0,
            height: 48.0,
        }
    }
}

fn default_z_index() -> i64 {
    1
}

/// Элемент сада: позиционированный объект на холсте
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Идентификатор (неизменяем после создания)
    pub id: ElementId,
    #[serde(rename = "type", default)]
    pub kind: ElementKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    /// Поворот в градусах
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub props: Props,
    /// Порядок отрисовки (1..N в порядке массива после перестановки слоёв)
    #[serde(default = "default_z_index")]
    pub z_index: i64,
}

impl Element {
    /// Новый элемент с размерами по умолчанию в начале координат
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            size: Size::default(),
            rotation: 0.0,
            props: Props::new(),
            z_index: default_z_index(),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    /// Правая граница
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    /// Нижняя граница
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}

fn default_grid_size() -> f64 {
    24.0
}

fn default_true() -> bool {
    true
}

fn default_zoom() -> f64 {
    1.0
}

fn default_background() -> String {
    "grid".to_string()
}

/// Настройки холста
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    #[serde(default = "default_true")]
    pub snap_to_grid: bool,
    /// Масштаб в диапазоне [MIN_ZOOM, MAX_ZOOM]
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            snap_to_grid: true,
            zoom: default_zoom(),
            background: default_background(),
        }
    }
}

/// Изменение одной настройки холста
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum SettingChange {
    GridSize(f64),
    SnapToGrid(bool),
    Zoom(f64),
    Background(String),
}

impl SettingChange {
    /// Имя ключа настройки
    pub fn key(&self) -> &'static str {
        match self {
            SettingChange::GridSize(_) => "gridSize",
            SettingChange::SnapToGrid(_) => "snapToGrid",
            SettingChange::Zoom(_) => "zoom",
            SettingChange::Background(_) => "background",
        }
    }
}

fn default_garden_name() -> String {
    "Untitled Garden".to_string()
}

/// Сад (документ): элементы, выделение и настройки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    /// Пустой id заменяется сгенерированным при инициализации
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_garden_name")]
    pub name: String,
    /// Элементы в порядке отрисовки (уникальные id)
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Выделенные id в порядке выбора
    #[serde(default)]
    pub selection: Vec<ElementId>,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for Garden {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: default_garden_name(),
            elements: Vec::new(),
            selection: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl Garden {
    /// Пустой сад с заданными id и именем
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Найти элемент по id
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Индекс элемента в массиве
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Есть ли элемент с таким id
    pub fn contains(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    /// Выделен ли элемент
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    /// Выделенные элементы в порядке документа
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| self.is_selected(&e.id))
            .collect()
    }

    /// Первый id, встречающийся в элементах дважды
    pub fn first_duplicate_id(&self) -> Option<&ElementId> {
        let mut seen = std::collections::HashSet::new();
        self.elements
            .iter()
            .map(|e| &e.id)
            .find(|id| !seen.insert(id.as_str()))
    }
}

/// Тип выравнивания выделения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignKind {
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    CenterY,
    DistributeX,
    DistributeY,
}

/// Направление перемещения слоя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerDirection {
    Forward,
    Backward,
    Front,
    Back,
}
