//! Centralized constants for the redirects analyzer settings.
//!
//! This module contains the environment variable names and default values
//! used by the loader, plus the fixed framework wiring that never comes
//! from the environment.

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_DEBUG: &str = "DJANGO_DEBUG";
pub const ENV_SECRET_KEY: &str = "DJANGO_SECRET_KEY";
pub const ENV_ADMINS: &str = "DJANGO_ADMINS";
pub const ENV_ALLOWED_HOSTS: &str = "DJANGO_ALLOWED_HOSTS";
pub const ENV_STATIC_ROOT: &str = "DJANGO_STATIC_ROOT";
pub const ENV_MEDIA_ROOT: &str = "DJANGO_MEDIA_ROOT";
pub const ENV_POSTGRES_HOST: &str = "POSTGRES_HOST";
pub const ENV_POSTGRES_PORT: &str = "POSTGRES_PORT";
pub const ENV_POSTGRES_DB: &str = "POSTGRES_DB";
pub const ENV_POSTGRES_USER: &str = "POSTGRES_USER";
pub const ENV_POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const ENV_EMAIL_URL: &str = "DJANGO_EMAIL_URL";
pub const ENV_EMAIL_BACKEND: &str = "DJANGO_EMAIL_BACKEND";
pub const ENV_DEFAULT_FROM_EMAIL: &str = "DJANGO_DEFAULT_FROM_EMAIL";
pub const ENV_SERVER_EMAIL: &str = "DJANGO_SERVER_EMAIL";
pub const ENV_BROKER_URL: &str = "BROKER_URL";
pub const ENV_RESULT_BACKEND: &str = "CELERY_RESULT_BACKEND";
pub const ENV_ACCEPT_CONTENT: &str = "CELERY_ACCEPT_CONTENT";
pub const ENV_TASK_SERIALIZER: &str = "CELERY_TASK_SERIALIZER";
pub const ENV_RESULT_SERIALIZER: &str = "CELERY_RESULT_SERIALIZER";

/// Setting this to `1` or `true` skips `.env` loading entirely.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Environment Defaults
// =============================================================================

pub const DEFAULT_POSTGRES_HOST: &str = "db";
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;
pub const DEFAULT_EMAIL_URL: &str = "consolemail://";
pub const DEFAULT_EMAIL_BACKEND: &str = "django.core.mail.backends.smtp.EmailBackend";
pub const DEFAULT_FROM_EMAIL: &str = "admin@example.com";
pub const DEFAULT_SERVER_EMAIL: &str = "root@localhost.com";
pub const DEFAULT_BROKER_URL: &str = "redis://localhost:6379";
pub const DEFAULT_RESULT_BACKEND: &str = "redis://localhost:6379";
pub const DEFAULT_ACCEPT_CONTENT: &[&str] = &["application/json"];
pub const DEFAULT_SERIALIZER: &str = "json";

// =============================================================================
// Filesystem Layout
// =============================================================================

/// Name of the override file looked up in the application root.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Directory (relative to the root) holding the application package.
pub const APPS_DIR_NAME: &str = "steelkiwi_python_test_task";

pub const STATIC_ROOT_DIR_NAME: &str = "staticfiles";
pub const STATIC_DIR_NAME: &str = "static";
pub const MEDIA_DIR_NAME: &str = "media";
pub const TEMPLATES_DIR_NAME: &str = "templates";

pub const STATIC_URL: &str = "/static/";
pub const MEDIA_URL: &str = "/media/";

// =============================================================================
// Framework Wiring
// =============================================================================

pub const DATABASE_ENGINE: &str = "django.db.backends.postgresql";
pub const ROOT_URLCONF: &str = "config.urls";
pub const WSGI_APPLICATION: &str = "config.wsgi.application";

pub const ADMIN_URL: &str = "admin/";
pub const ADMIN_SITE_TITLE: &str = "Redirects Analyzer";
pub const ADMIN_SITE_HEADER: &str = "Redirects Analyzer";

pub const TIME_ZONE: &str = "UTC";
pub const LANGUAGE_CODE: &str = "en-us";
pub const SITE_ID: u32 = 1;

pub const EMAIL_SUBJECT_PREFIX: &str = "";

pub const FRAMEWORK_APPS: &[&str] = &[
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.sites",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "django.contrib.admin",
];

pub const THIRD_PARTY_APPS: &[&str] = &[
    "django_extensions",
    "rest_framework",
    "django_filters",
    "drf_yasg",
];

pub const LOCAL_APPS: &[&str] = &["redirects_analyzer.apps.RedirectsAnalyzerAppConfig"];

pub const MIDDLEWARE: &[&str] = &[
    "django.contrib.sessions.middleware.SessionMiddleware",
    "django.middleware.common.CommonMiddleware",
    "django.middleware.csrf.CsrfViewMiddleware",
    "django.contrib.auth.middleware.AuthenticationMiddleware",
    "django.contrib.messages.middleware.MessageMiddleware",
    "django.middleware.clickjacking.XFrameOptionsMiddleware",
];

pub const TEMPLATE_BACKEND: &str = "django.template.backends.django.DjangoTemplates";

pub const TEMPLATE_LOADERS: &[&str] = &[
    "django.template.loaders.filesystem.Loader",
    "django.template.loaders.app_directories.Loader",
];

pub const TEMPLATE_CONTEXT_PROCESSORS: &[&str] = &[
    "django.template.context_processors.debug",
    "django.template.context_processors.request",
    "django.contrib.auth.context_processors.auth",
    "django.template.context_processors.i18n",
    "django.template.context_processors.media",
    "django.template.context_processors.static",
    "django.template.context_processors.tz",
    "django.contrib.messages.context_processors.messages",
];

pub const STATICFILES_FINDERS: &[&str] = &[
    "django.contrib.staticfiles.finders.FileSystemFinder",
    "django.contrib.staticfiles.finders.AppDirectoriesFinder",
];

pub const REST_RENDERER_CLASSES: &[&str] = &["rest_framework.renderers.JSONRenderer"];

/// Placeholder printed instead of secret values.
pub const REDACTED: &str = "********";
