/// SQL text for server database operations
pub struct Queries;

impl Queries {
    // Schema bootstrap. All statements are create-if-absent so running them
    // on every start is a no-op once the schema exists. The UNIQUE constraint
    // on email is the authoritative uniqueness guard; it also creates the
    // email index.
    pub const CREATE_USERS_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            amount REAL NOT NULL
        )
    "#;

    pub const CREATE_NAME_INDEX: &'static str = r#"
        CREATE INDEX IF NOT EXISTS idx_users_name ON users (name)
    "#;

    pub const CREATE_AMOUNT_INDEX: &'static str = r#"
        CREATE INDEX IF NOT EXISTS idx_users_amount ON users (amount)
    "#;

    // User queries
    pub const INSERT_USER: &'static str = r#"
        INSERT INTO users (name, email, amount)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, email, amount
    "#;

    pub const FIND_USER_BY_EMAIL: &'static str = r#"
        SELECT id, name, email, amount
        FROM users
        WHERE email = ?1
        LIMIT 1
    "#;

    pub const LIST_USERS: &'static str = r#"
        SELECT id, name, email, amount
        FROM users
        ORDER BY id
    "#;
}
