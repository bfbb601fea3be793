//! Per-language facts the instruction generators draw on.

/// Static description of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub name: &'static str,
    pub display: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob for `applyTo` front matter.
    pub source_glob: &'static str,
    /// Glob matching test files.
    pub test_glob: &'static str,
    /// Files worth reading before touching code.
    pub context_files: &'static [&'static str],
    pub guidelines: &'static [&'static str],
    pub checklist: &'static [&'static str],
    pub test_checklist: &'static [&'static str],
}

const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "go",
        display: "Go",
        aliases: &["golang"],
        source_glob: "**/*.go",
        test_glob: "**/*_test.go",
        context_files: &["go.mod", "main.go"],
        guidelines: &[
            "Follow Go conventions and idioms (effective Go)",
            "Package names should be lowercase, single words",
            "Use interfaces to define behavior contracts",
            "Prefer composition over inheritance",
            "Use context.Context for request scoping and cancellation",
        ],
        checklist: &[
            "Comprehensive error handling with wrapped errors",
            "Unit tests with table-driven test patterns",
            "Benchmark tests for performance-critical code",
        ],
        test_checklist: &[
            "Table-driven test patterns",
            "Benchmark tests for performance-critical code",
        ],
    },
    LanguageProfile {
        name: "python",
        display: "Python",
        aliases: &["py"],
        source_glob: "**/*.py",
        test_glob: "**/test_*.py",
        context_files: &["requirements.txt", "pyproject.toml"],
        guidelines: &[
            "Follow PEP 8 style guidelines",
            "Use type hints for function signatures",
            "Use context managers for resource management",
            "Prefer comprehensions and generator expressions",
        ],
        checklist: &[
            "Proper exception handling with specific exception types",
            "Unit tests with pytest or unittest",
            "Type hints for better maintainability",
        ],
        test_checklist: &["Pytest fixtures and parametrized cases"],
    },
    LanguageProfile {
        name: "java",
        display: "Java",
        aliases: &[],
        source_glob: "**/*.java",
        test_glob: "**/test/**/*.java",
        context_files: &["pom.xml", "build.gradle"],
        guidelines: &[
            "Follow Java naming conventions (camelCase, PascalCase)",
            "Use try-with-resources for resource handling",
            "Implement equals() and hashCode() consistently",
            "Follow SOLID principles",
        ],
        checklist: &[
            "Comprehensive exception handling with custom exceptions",
            "Unit tests with JUnit and appropriate mocking",
            "JavaDoc for all public methods",
        ],
        test_checklist: &["JUnit test classes with proper annotations"],
    },
    LanguageProfile {
        name: "javascript",
        display: "JavaScript",
        aliases: &["js", "node", "node.js", "nodejs"],
        source_glob: "**/*.{js,mjs,cjs}",
        test_glob: "**/*.test.js",
        context_files: &["package.json"],
        guidelines: &[
            "Use async/await for asynchronous operations",
            "Use ES modules and modern syntax",
            "Handle errors explicitly with try/catch",
        ],
        checklist: &[
            "Proper error handling with error objects",
            "Unit tests with Jest, Mocha, or similar framework",
            "JSDoc annotations for exported functions",
        ],
        test_checklist: &["Async/await patterns for async code"],
    },
    LanguageProfile {
        name: "typescript",
        display: "TypeScript",
        aliases: &["ts"],
        source_glob: "**/*.{ts,tsx}",
        test_glob: "**/*.test.ts",
        context_files: &["package.json", "tsconfig.json"],
        guidelines: &[
            "Enable strict mode and avoid `any`",
            "Define interfaces for all data structures",
            "Use generics for reusable code",
        ],
        checklist: &[
            "Proper TypeScript type annotations",
            "Unit tests with Jest or Vitest",
            "Error handling with typed errors",
        ],
        test_checklist: &["Type-safe mock implementations"],
    },
    LanguageProfile {
        name: "rust",
        display: "Rust",
        aliases: &["rs"],
        source_glob: "**/*.rs",
        test_glob: "**/tests/**/*.rs",
        context_files: &["Cargo.toml"],
        guidelines: &[
            "Use Result and the ? operator for error propagation",
            "Leverage the type system for invariants",
            "Run rustfmt and clippy",
        ],
        checklist: &[
            "Error handling with Result and Option types",
            "Unit tests and documentation tests",
            "Benchmarks for performance-critical code",
        ],
        test_checklist: &["#[test] unit tests next to the code", "Integration tests in tests/"],
    },
    LanguageProfile {
        name: "csharp",
        display: "C#",
        aliases: &["c#", "cs", ".net", "dotnet"],
        source_glob: "**/*.cs",
        test_glob: "**/*Tests.cs",
        context_files: &["*.csproj", "*.sln"],
        guidelines: &[
            "Follow .NET naming conventions (PascalCase)",
            "Use async/await for asynchronous operations",
            "Use dependency injection",
        ],
        checklist: &[
            "Proper exception handling",
            "Unit tests with xUnit or NUnit",
            "XML documentation comments for public APIs",
        ],
        test_checklist: &["Mock objects with Moq or similar"],
    },
];

/// Look a language up by name or alias, case-insensitively.
pub fn lookup(language: &str) -> Option<&'static LanguageProfile> {
    let wanted = language.trim().to_ascii_lowercase();
    PROFILES
        .iter()
        .find(|p| p.name == wanted || p.aliases.contains(&wanted.as_str()))
}

/// Every known profile, in display order.
pub fn all() -> &'static [LanguageProfile] {
    PROFILES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_and_alias() {
        assert_eq!(lookup("Go").unwrap().name, "go");
        assert_eq!(lookup("golang").unwrap().name, "go");
        assert_eq!(lookup(" TS ").unwrap().name, "typescript");
        assert_eq!(lookup("C#").unwrap().name, "csharp");
        assert!(lookup("cobol").is_none());
    }

    #[test]
    fn names_and_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in all() {
            assert!(seen.insert(p.name), "{}", p.name);
            for a in p.aliases {
                assert!(seen.insert(*a), "{a}");
            }
        }
    }
}
