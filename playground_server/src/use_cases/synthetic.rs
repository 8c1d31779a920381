// Synthetic payloads attached to the response-time and DOM-load endpoints.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::domain::entities::iso_timestamp;
use crate::domain::ports::RandomSource;

const MOCK_USER_COUNT: u32 = 10;
const MOCK_PRODUCT_COUNT: u32 = 5;
// Extra render budget hinted on top of the delay.
const RENDER_OVERHEAD_MS: u64 = 200;
// DOM nodes a single content chunk expands into.
const NODES_PER_CHUNK: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockProduct {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MockData {
    pub users: Vec<MockUser>,
    pub products: Vec<MockProduct>,
}

pub fn mock_data(random: &dyn RandomSource) -> MockData {
    let users = (1..=MOCK_USER_COUNT)
        .map(|id| MockUser {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            active: random.next_unit() > 0.5,
        })
        .collect();

    let products = (1..=MOCK_PRODUCT_COUNT)
        .map(|id| MockProduct {
            id,
            name: format!("Product {id}"),
            // One decimal place, 0.0 to 100.0.
            price: (random.next_unit() * 1000.0).round() / 10.0,
            in_stock: random.next_unit() > 0.3,
        })
        .collect();

    MockData { users, products }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentChunk {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub load_time: u64,
}

// Four chunks revealed at 0%, 30%, 60% and 100% of the delay.
pub fn content_chunks(delay_ms: u64) -> Vec<ContentChunk> {
    vec![
        ContentChunk {
            id: 1,
            title: "Initial Content",
            content: "This is the first chunk of content that loads immediately.",
            load_time: 0,
        },
        ContentChunk {
            id: 2,
            title: "Secondary Content",
            content: "This content appears after a short delay, simulating async loading.",
            load_time: delay_ms * 3 / 10,
        },
        ContentChunk {
            id: 3,
            title: "Tertiary Content",
            content: "Additional content that loads later, demonstrating progressive enhancement.",
            load_time: delay_ms * 6 / 10,
        },
        ContentChunk {
            id: 4,
            title: "Final Content",
            content: "The last piece of content to load, completing the DOM construction.",
            load_time: delay_ms,
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub month: u32,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetStats {
    pub users: u32,
    pub orders: u32,
    pub revenue: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetNotification {
    pub id: u32,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetActivity {
    pub id: u32,
    pub action: String,
    pub user: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Widget {
    Chart(Vec<ChartPoint>),
    Stats(WidgetStats),
    Notifications(Vec<WidgetNotification>),
    Activities(Vec<WidgetActivity>),
}

impl Widget {
    // Number of entries (or keys, for stats) rendered by the widget.
    pub fn item_count(&self) -> usize {
        match self {
            Widget::Chart(points) => points.len(),
            Widget::Stats(_) => 3,
            Widget::Notifications(items) => items.len(),
            Widget::Activities(items) => items.len(),
        }
    }
}

fn scaled(random: &dyn RandomSource, upper: u32) -> u32 {
    (random.next_unit() * f64::from(upper)).floor() as u32
}

pub fn widgets(now: DateTime<Utc>, random: &dyn RandomSource) -> Vec<Widget> {
    let chart = (1..=12)
        .map(|month| ChartPoint {
            month,
            value: scaled(random, 100),
        })
        .collect();

    let stats = WidgetStats {
        users: scaled(random, 10_000),
        orders: scaled(random, 5_000),
        revenue: scaled(random, 100_000),
    };

    let notifications = (0..5)
        .map(|offset| WidgetNotification {
            id: offset + 1,
            message: format!("Notification {}", offset + 1),
            time: iso_timestamp(now - TimeDelta::hours(i64::from(offset))),
        })
        .collect();

    let activities = (0..8)
        .map(|offset| WidgetActivity {
            id: offset + 1,
            action: format!("Action {}", offset + 1),
            user: format!("User {}", offset + 1),
            timestamp: iso_timestamp(now - TimeDelta::minutes(30 * i64::from(offset))),
        })
        .collect();

    vec![
        Widget::Chart(chart),
        Widget::Stats(stats),
        Widget::Notifications(notifications),
        Widget::Activities(activities),
    ]
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomStructure {
    pub elements: usize,
    #[serde(rename = "estimatedDOMNodes")]
    pub estimated_dom_nodes: usize,
    pub load_strategy: &'static str,
}

pub fn dom_structure(chunks: &[ContentChunk], widgets: &[Widget]) -> DomStructure {
    DomStructure {
        elements: chunks.len() + widgets.len(),
        estimated_dom_nodes: chunks.len() * NODES_PER_CHUNK
            + widgets.iter().map(Widget::item_count).sum::<usize>(),
        load_strategy: "progressive",
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceHints {
    pub total_delay: u64,
    pub chunk_delays: Vec<u64>,
    pub recommended_batch_size: usize,
    pub estimated_render_time: u64,
}

pub fn performance_hints(delay_ms: u64, chunks: &[ContentChunk]) -> PerformanceHints {
    PerformanceHints {
        total_delay: delay_ms,
        chunk_delays: chunks.iter().map(|chunk| chunk.load_time).collect(),
        recommended_batch_size: chunks.len().div_ceil(2),
        estimated_render_time: delay_ms + RENDER_OVERHEAD_MS,
    }
}
