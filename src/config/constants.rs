//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_STUDENT: &str = "Student";

/// Mentor role, may host mentorship sessions
pub const ROLE_MENTOR: &str = "Mentor";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "Admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_STUDENT, ROLE_MENTOR, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database host (for development)
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default database user (for development)
pub const DEFAULT_DB_USER: &str = "root";

/// Default database name (for development)
pub const DEFAULT_DB_NAME: &str = "student_hub";

// =============================================================================
// API client
// =============================================================================

/// Default base URL for the bundled API client
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

// =============================================================================
// Feature flags
// =============================================================================

/// Default feature flags seeded by `ops seed-flags`.
/// Key, display name, enabled-by-default.
pub const DEFAULT_FEATURE_FLAGS: &[(&str, &str, bool)] = &[
    ("dashboard", "Dashboard", true),
    ("courses", "Courses", false),
    ("coding", "Coding Platform", false),
    ("jobs", "Jobs & Internships", false),
    ("mentorship", "Mentorship", false),
    ("news", "News & Updates", false),
    ("projects", "Projects", false),
    ("events", "Events", false),
    ("placements", "Placements", false),
];

// =============================================================================
// Code execution (Piston)
// =============================================================================

/// Public Piston execution endpoint used by the coding platform
pub const PISTON_API_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Languages the coding platform accepts, mapped to Piston versions
pub const PISTON_LANGUAGES: &[(&str, &str, &str)] = &[
    ("python", "python", "3.10.0"),
    ("javascript", "javascript", "18.15.0"),
    ("java", "java", "15.0.2"),
    ("cpp", "c++", "10.2.0"),
    ("c", "c", "10.2.0"),
];
