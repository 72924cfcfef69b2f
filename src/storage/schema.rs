/// Categories: id -> unique name
pub const CREATE_CATEGORIES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)
"#;

/// Created separately so databases bootstrapped without the constraint pick it up.
pub const CREATE_CATEGORY_NAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_name ON categories(name)";

/// Items: id -> (name, category, content-addressed image name)
pub const CREATE_ITEMS: &str = r#"
CREATE TABLE IF NOT EXISTS items2 (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category_id INTEGER NOT NULL REFERENCES categories(id),
    image_name TEXT NOT NULL
)
"#;

pub const ALL: [&str; 3] = [CREATE_CATEGORIES, CREATE_CATEGORY_NAME_INDEX, CREATE_ITEMS];
