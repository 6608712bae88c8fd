//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires a `DATABASE_URL` environment variable (reads .env).

use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== opsboard seed script ===");

    seed_users(&pool).await?;
    seed_projects(&pool).await?;
    seed_tasks(&pool).await?;
    seed_items(&pool).await?;
    seed_activity(&pool).await?;

    println!("\n=== Seed complete! ===");

    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    let users = [
        ("alice", "Alice Moreau"),
        ("bob", "Bob Keller"),
        ("carol", "Carol Danvers"),
        ("dave", "Dave Okafor"),
    ];

    for (username, display_name) in users {
        sqlx::query(
            "INSERT INTO users (username, display_name) VALUES ($1, $2)
             ON CONFLICT (username) DO NOTHING",
        )
        .bind(username)
        .bind(display_name)
        .execute(pool)
        .await?;
    }

    println!("[done] Seeded {} users", users.len());
    Ok(())
}

async fn seed_projects(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Projects already seeded");
        return Ok(());
    }

    let projects = [
        ("Website relaunch", "active"),
        ("Mobile app", "active"),
        ("Data warehouse migration", "active"),
        ("Legacy CRM sunset", "completed"),
    ];

    for (name, status) in projects {
        sqlx::query("INSERT INTO projects (name, status) VALUES ($1, $2)")
            .bind(name)
            .bind(status)
            .execute(pool)
            .await?;
    }

    println!("[done] Seeded {} projects", projects.len());
    Ok(())
}

async fn seed_tasks(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Tasks already seeded");
        return Ok(());
    }

    let tasks = [
        ("Design landing page", "completed"),
        ("Write API docs", "completed"),
        ("Set up staging environment", "completed"),
        ("Implement search", "in-progress"),
        ("Review analytics queries", "in-progress"),
        ("Plan Q4 roadmap", "pending"),
        ("Audit dependencies", "pending"),
        ("Fix mobile layout", "pending"),
        ("Migrate CI pipeline", "pending"),
        ("Archive old reports", "cancelled"),
    ];

    for (title, status) in tasks {
        sqlx::query("INSERT INTO tasks (title, status) VALUES ($1, $2)")
            .bind(title)
            .bind(status)
            .execute(pool)
            .await?;
    }

    println!("[done] Seeded {} tasks", tasks.len());
    Ok(())
}

async fn seed_items(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Items already seeded");
        return Ok(());
    }

    let statuses = ["pending", "in-progress", "completed", "cancelled"];
    let assignees = ["alice", "bob", "carol", "dave"];

    // Staggered dates so list ordering and pagination are visible out of the box.
    for i in 0..25i32 {
        sqlx::query(
            "INSERT INTO items (title, description, status, assigned_to, date)
             VALUES ($1, $2, $3, $4, NOW() - make_interval(hours => $5))",
        )
        .bind(format!("Dashboard item {}", i + 1))
        .bind(format!("Sample record #{} for the items table", i + 1))
        .bind(statuses[(i as usize) % statuses.len()])
        .bind(assignees[(i as usize) % assignees.len()])
        .bind(i)
        .execute(pool)
        .await?;
    }

    println!("[done] Seeded 25 items");
    Ok(())
}

async fn seed_activity(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activity")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Activity already seeded");
        return Ok(());
    }

    let events = [
        ("task", "Task completed", Some("Design landing page marked completed")),
        ("project", "Project created", Some("Data warehouse migration kicked off")),
        ("user", "User joined", Some("carol was added to the workspace")),
        ("task", "Task reassigned", None),
        ("item", "Item updated", Some("Dashboard item 3 moved to in-progress")),
        ("task", "Task created", Some("Audit dependencies added to backlog")),
        ("project", "Project archived", Some("Legacy CRM sunset wrapped up")),
    ];

    for (i, (event_type, title, description)) in events.iter().enumerate() {
        sqlx::query(
            "INSERT INTO activity (event_type, title, description, timestamp)
             VALUES ($1, $2, $3, NOW() - make_interval(mins => $4))",
        )
        .bind(event_type)
        .bind(title)
        .bind(description)
        .bind(i as i32 * 17)
        .execute(pool)
        .await?;
    }

    println!("[done] Seeded {} activity events", events.len());
    Ok(())
}
