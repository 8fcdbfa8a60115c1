//! Matchers for APIs that execute SQL, HQL, JPQL or JDOQL text.
//!
//! # Rationale
//!
//! Query strings built by concatenation are the classic injection vector.
//! These matchers find every call that hands query text to a driver or
//! ORM, so a host rule can inspect the argument.
//!
//! # Detected Patterns
//!
//! - JDBC `Statement` execution and `Connection` statement preparation
//! - Hibernate `Session.createQuery` / `createSQLQuery`
//! - JPA `EntityManager.createQuery` / `createNativeQuery`
//! - Spring `JdbcOperations` and `PreparedStatementCreatorFactory`
//! - JDO `PersistenceManager.newQuery`, `Query.setFilter` / `setGrouping`
//!
//! Interface-based APIs match implementations too.

use methodmatch_core::{MatcherError, MethodMatcherBuilder, MethodMatchers, Severity};

use crate::presets::CatalogEntry;

/// Catalog code for sql-injection.
pub const CODE: &str = "S2077";

/// Catalog name for sql-injection.
pub const NAME: &str = "sql-injection";

const JAVA_SQL_STATEMENT: &str = "java.sql.Statement";
const JAVA_SQL_CONNECTION: &str = "java.sql.Connection";
const SPRING_JDBC_OPERATIONS: &str = "org.springframework.jdbc.core.JdbcOperations";
const SPRING_STATEMENT_CREATOR_FACTORY: &str =
    "org.springframework.jdbc.core.PreparedStatementCreatorFactory";

/// Catalog entry for sql-injection.
pub const ENTRY: CatalogEntry = CatalogEntry {
    code: CODE,
    name: NAME,
    description: "Formatting SQL queries is security-sensitive",
    message: "Ensure that string concatenation is required and safe for this SQL query.",
    severity: Severity::Error,
    build: matchers,
};

fn subtype_of(fully_qualified_name: &str) -> MethodMatcherBuilder {
    MethodMatchers::create().of_sub_type(fully_qualified_name)
}

/// Builds the sql-injection matchers.
///
/// # Errors
///
/// Returns an error if a matcher definition is invalid.
pub fn matchers() -> Result<MethodMatchers, MatcherError> {
    Ok(MethodMatchers::or([
        subtype_of("org.hibernate.Session")
            .names(["createQuery", "createSQLQuery"])
            .with_any_parameters()
            .build()?,
        subtype_of(JAVA_SQL_STATEMENT)
            .names([
                "executeQuery",
                "execute",
                "executeUpdate",
                "executeLargeUpdate",
                "addBatch",
            ])
            .with_any_parameters()
            .build()?,
        subtype_of(JAVA_SQL_CONNECTION)
            .names(["prepareStatement", "prepareCall", "nativeSQL"])
            .with_any_parameters()
            .build()?,
        MethodMatchers::create()
            .of_type("javax.persistence.EntityManager")
            .names(["createNativeQuery", "createQuery"])
            .with_any_parameters()
            .build()?,
        subtype_of(SPRING_JDBC_OPERATIONS)
            .names([
                "batchUpdate",
                "execute",
                "query",
                "queryForList",
                "queryForMap",
                "queryForObject",
                "queryForRowSet",
                "queryForInt",
                "queryForLong",
                "update",
            ])
            .with_any_parameters()
            .build()?,
        MethodMatchers::create()
            .of_type(SPRING_STATEMENT_CREATOR_FACTORY)
            .constructor()
            .name("newPreparedStatementCreator")
            .with_any_parameters()
            .build()?,
        subtype_of("javax.jdo.PersistenceManager")
            .name("newQuery")
            .with_any_parameters()
            .build()?,
        subtype_of("javax.jdo.Query")
            .names(["setFilter", "setGrouping"])
            .with_any_parameters()
            .build()?,
    ]))
}
