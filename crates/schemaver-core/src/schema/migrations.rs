use std::borrow::Cow;

/// The SQL describing one adjacent schema change.
#[derive(Debug)]
pub struct Migration {
    pub from: u32,
    pub to: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

const MIGRATION_001_002: &str = r#"-- Migration V1 → V2
ALTER TABLE users ADD COLUMN email VARCHAR(255);
ALTER TABLE users ADD COLUMN updated_at TIMESTAMP;
UPDATE users SET updated_at = created_at WHERE updated_at IS NULL;
"#;

const MIGRATION_002_003: &str = r#"-- Migration V2 → V3
ALTER TABLE users ADD COLUMN phone VARCHAR(50);
"#;

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        from: 1,
        to: 2,
        name: "add_email_and_updated_at",
        sql: MIGRATION_001_002,
    },
    Migration {
        from: 2,
        to: 3,
        name: "add_phone",
        sql: MIGRATION_002_003,
    },
];

/// Look up the migration registered for exactly `from → to`.
pub fn find_migration(from: u32, to: u32) -> Option<&'static Migration> {
    MIGRATIONS.iter().find(|m| m.from == from && m.to == to)
}

/// The SQL for `from → to`, or a comment saying none exists.
///
/// Only adjacent pairs are registered. Spans, reversed pairs and unknown
/// versions all get the placeholder; use [`migration_plan`] to walk a span.
pub fn migration_script(from: u32, to: u32) -> Cow<'static, str> {
    match find_migration(from, to) {
        Some(migration) => Cow::Borrowed(migration.sql),
        None => Cow::Owned(placeholder(from, to)),
    }
}

/// One script per hop for a forward span, in hop order.
///
/// Empty when `to <= from`.
pub fn migration_plan(from: u32, to: u32) -> Vec<Cow<'static, str>> {
    (from..to).map(|v| migration_script(v, v + 1)).collect()
}

fn placeholder(from: u32, to: u32) -> String {
    format!("-- No migration script available for {} → {}", from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_adjacent_and_ordered() {
        for pair in MIGRATIONS.windows(2) {
            assert!(pair[0].from < pair[1].from);
        }
        for migration in MIGRATIONS {
            assert_eq!(migration.to, migration.from + 1, "{}", migration.name);
        }
    }

    #[test]
    fn test_script_for_registered_pair() {
        let sql = migration_script(1, 2);
        assert!(sql.contains("ADD COLUMN email VARCHAR(255)"));
        assert!(sql.contains("ADD COLUMN updated_at TIMESTAMP"));
        assert!(sql.contains("SET updated_at = created_at"));

        assert!(migration_script(2, 3).contains("ADD COLUMN phone VARCHAR(50)"));
    }

    #[test]
    fn test_script_placeholder_for_span() {
        assert_eq!(
            migration_script(1, 3),
            "-- No migration script available for 1 → 3"
        );
    }

    #[test]
    fn test_script_placeholder_for_reverse_and_unknown() {
        assert_eq!(
            migration_script(2, 1),
            "-- No migration script available for 2 → 1"
        );
        assert_eq!(
            migration_script(7, 8),
            "-- No migration script available for 7 → 8"
        );
    }

    #[test]
    fn test_plan_walks_each_hop() {
        let plan = migration_plan(1, 4);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0], MIGRATION_001_002);
        assert_eq!(plan[1], MIGRATION_002_003);
        assert_eq!(plan[2], "-- No migration script available for 3 → 4");
    }

    #[test]
    fn test_plan_empty_when_not_forward() {
        assert!(migration_plan(3, 3).is_empty());
        assert!(migration_plan(3, 1).is_empty());
    }
}
