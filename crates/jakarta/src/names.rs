//! Qualified names of the Jakarta EE types the rules look at.

pub mod annotation {
    pub const RESOURCE: &str = "jakarta.annotation.Resource";
    pub const POST_CONSTRUCT: &str = "jakarta.annotation.PostConstruct";
    pub const PRE_DESTROY: &str = "jakarta.annotation.PreDestroy";
}

pub mod jaxrs {
    pub const PATH: &str = "jakarta.ws.rs.Path";
    pub const PROVIDER: &str = "jakarta.ws.rs.ext.Provider";

    pub const HTTP_METHODS: &[&str] = &[
        "jakarta.ws.rs.GET",
        "jakarta.ws.rs.POST",
        "jakarta.ws.rs.PUT",
        "jakarta.ws.rs.DELETE",
        "jakarta.ws.rs.HEAD",
        "jakarta.ws.rs.OPTIONS",
        "jakarta.ws.rs.PATCH",
    ];

    /// Parameter annotations that keep a parameter from being the entity body.
    pub const NON_ENTITY_PARAMS: &[&str] = &[
        "jakarta.ws.rs.PathParam",
        "jakarta.ws.rs.QueryParam",
        "jakarta.ws.rs.FormParam",
        "jakarta.ws.rs.HeaderParam",
        "jakarta.ws.rs.CookieParam",
        "jakarta.ws.rs.MatrixParam",
        "jakarta.ws.rs.BeanParam",
        "jakarta.ws.rs.core.Context",
        "jakarta.ws.rs.container.Suspended",
    ];
}

pub mod cdi {
    pub const PRODUCES: &str = "jakarta.enterprise.inject.Produces";
    pub const DISPOSES: &str = "jakarta.enterprise.inject.Disposes";
    pub const OBSERVES: &str = "jakarta.enterprise.event.Observes";
    pub const OBSERVES_ASYNC: &str = "jakarta.enterprise.event.ObservesAsync";

    pub const SCOPES: &[&str] = &[
        "jakarta.enterprise.context.ApplicationScoped",
        "jakarta.enterprise.context.ConversationScoped",
        "jakarta.enterprise.context.Dependent",
        "jakarta.enterprise.context.RequestScoped",
        "jakarta.enterprise.context.SessionScoped",
    ];

    pub const INVALID_INJECT_PARAMS: &[&str] = &[DISPOSES, OBSERVES, OBSERVES_ASYNC];
}

pub mod inject {
    pub const INJECT: &str = "jakarta.inject.Inject";
}

pub mod persistence {
    pub const ENTITY: &str = "jakarta.persistence.Entity";
    pub const MAP_KEY: &str = "jakarta.persistence.MapKey";
    pub const MAP_KEY_CLASS: &str = "jakarta.persistence.MapKeyClass";
    pub const MAP_KEY_JOIN_COLUMN: &str = "jakarta.persistence.MapKeyJoinColumn";
    pub const MAP_KEY_JOIN_COLUMNS: &str = "jakarta.persistence.MapKeyJoinColumns";
    pub const JOIN_COLUMN_ATTRIBUTES: &[&str] = &["name", "referencedColumnName"];
}

pub mod servlet {
    pub const WEB_SERVLET: &str = "jakarta.servlet.annotation.WebServlet";
    pub const WEB_FILTER: &str = "jakarta.servlet.annotation.WebFilter";
    pub const WEB_LISTENER: &str = "jakarta.servlet.annotation.WebListener";
    pub const HTTP_SERVLET: &str = "jakarta.servlet.http.HttpServlet";
    pub const FILTER: &str = "jakarta.servlet.Filter";

    pub const LISTENERS: &[&str] = &[
        "jakarta.servlet.ServletContextListener",
        "jakarta.servlet.ServletContextAttributeListener",
        "jakarta.servlet.ServletRequestListener",
        "jakarta.servlet.ServletRequestAttributeListener",
        "jakarta.servlet.http.HttpSessionListener",
        "jakarta.servlet.http.HttpSessionAttributeListener",
        "jakarta.servlet.http.HttpSessionIdListener",
    ];
}

pub mod validation {
    pub const ASSERT_TRUE: &str = "jakarta.validation.constraints.AssertTrue";
    pub const ASSERT_FALSE: &str = "jakarta.validation.constraints.AssertFalse";
    pub const EMAIL: &str = "jakarta.validation.constraints.Email";
    pub const NOT_BLANK: &str = "jakarta.validation.constraints.NotBlank";
    pub const PATTERN: &str = "jakarta.validation.constraints.Pattern";

    pub const CONSTRAINTS: &[&str] = &[
        ASSERT_FALSE,
        ASSERT_TRUE,
        "jakarta.validation.constraints.DecimalMax",
        "jakarta.validation.constraints.DecimalMin",
        "jakarta.validation.constraints.Digits",
        EMAIL,
        "jakarta.validation.constraints.Future",
        "jakarta.validation.constraints.FutureOrPresent",
        "jakarta.validation.constraints.Max",
        "jakarta.validation.constraints.Min",
        "jakarta.validation.constraints.Negative",
        "jakarta.validation.constraints.NegativeOrZero",
        NOT_BLANK,
        "jakarta.validation.constraints.NotEmpty",
        "jakarta.validation.constraints.NotNull",
        "jakarta.validation.constraints.Null",
        "jakarta.validation.constraints.Past",
        "jakarta.validation.constraints.PastOrPresent",
        PATTERN,
        "jakarta.validation.constraints.Positive",
        "jakarta.validation.constraints.PositiveOrZero",
        "jakarta.validation.constraints.Size",
    ];

    pub const BOOLEAN_ONLY: &[&str] = &[ASSERT_TRUE, ASSERT_FALSE];
    pub const STRING_ONLY: &[&str] = &[EMAIL, NOT_BLANK, PATTERN];
}

pub mod jsonb {
    pub const PACKAGE: &str = "jakarta.json.bind.annotation";
    pub const CREATOR: &str = "jakarta.json.bind.annotation.JsonbCreator";
    pub const TRANSIENT: &str = "jakarta.json.bind.annotation.JsonbTransient";

    pub const ANNOTATIONS: &[&str] = &[
        "jakarta.json.bind.annotation.JsonbAnnotation",
        CREATOR,
        "jakarta.json.bind.annotation.JsonbDateFormat",
        "jakarta.json.bind.annotation.JsonbNillable",
        "jakarta.json.bind.annotation.JsonbNumberFormat",
        "jakarta.json.bind.annotation.JsonbProperty",
        "jakarta.json.bind.annotation.JsonbPropertyOrder",
        TRANSIENT,
        "jakarta.json.bind.annotation.JsonbTypeAdapter",
        "jakarta.json.bind.annotation.JsonbTypeDeserializer",
        "jakarta.json.bind.annotation.JsonbTypeSerializer",
        "jakarta.json.bind.annotation.JsonbVisibility",
    ];
}

/// Every diagnostic code the rule set reports.
pub mod codes {
    pub const MISSING_RESOURCE_NAME: &str = "MissingResourceNameAttribute";
    pub const MISSING_RESOURCE_TYPE: &str = "MissingResourceTypeAttribute";
    pub const POST_CONSTRUCT_PARAMS: &str = "PostConstructParams";
    pub const POST_CONSTRUCT_RETURN_TYPE: &str = "PostConstructReturnType";
    pub const POST_CONSTRUCT_EXCEPTION: &str = "PostConstructException";
    pub const POST_CONSTRUCT_STATIC: &str = "PostConstructStatic";
    pub const PRE_DESTROY_PARAMS: &str = "PreDestroyParams";
    pub const PRE_DESTROY_RETURN_TYPE: &str = "PreDestroyReturnType";
    pub const PRE_DESTROY_EXCEPTION: &str = "PreDestroyException";
    pub const PRE_DESTROY_STATIC: &str = "PreDestroyStatic";

    pub const NON_PUBLIC_RESOURCE_METHOD: &str = "NonPublicResourceMethod";
    pub const MULTIPLE_ENTITY_PARAMS: &str = "ResourceMethodMultipleEntityParams";
    pub const NO_PUBLIC_CONSTRUCTOR: &str = "NoPublicConstructor";
    pub const UNUSED_CONSTRUCTOR: &str = "UnusedConstructor";
    pub const AMBIGUOUS_CONSTRUCTORS: &str = "AmbiguousConstructors";

    pub const SCOPES_ON_MANAGED_BEAN: &str = "InvalidNumberOfScopedAnnotationsByManagedBean";
    pub const SCOPES_ON_PRODUCER_FIELD: &str = "InvalidNumberOfScopeAnnotationsByProducerField";
    pub const SCOPES_ON_PRODUCER_METHOD: &str = "InvalidNumberOfScopeAnnotationsByProducerMethod";
    pub const PRODUCES_AND_INJECT: &str = "RemoveProducesOrInject";
    pub const INVALID_INJECT_PARAM: &str = "RemoveInvalidInjectParamAnnotation";

    pub const INJECT_FINAL: &str = "RemoveInjectOrFinal";
    pub const INJECT_ABSTRACT: &str = "RemoveInjectForAbstract";
    pub const INJECT_STATIC: &str = "RemoveInjectForStatic";
    pub const INJECT_GENERIC: &str = "RemoveInjectForGeneric";
    pub const INJECT_CONSTRUCTORS: &str = "RemoveInjectForConstructor";

    pub const ENTITY_NO_ARG_CONSTRUCTOR: &str = "MissingEntityNoArgConstructor";
    pub const ENTITY_FINAL_CLASS: &str = "InvalidFinalClassInEntityAnnotatedClass";
    pub const ENTITY_FINAL_METHOD: &str = "InvalidFinalMethodInEntityAnnotatedClass";
    pub const ENTITY_FINAL_FIELD: &str = "InvalidPersistentFieldInEntityAnnotatedClass";
    pub const MAP_KEY_AND_MAP_KEY_CLASS: &str = "RemoveMapKeyOrMapKeyClass";
    pub const MAP_KEY_JOIN_COLUMN_ATTRIBUTES: &str = "MissingAttributesOnMapKeyJoinColumn";

    pub const SERVLET_NOT_HTTP_SERVLET: &str = "WebServletAnnotatedClassDoesNotExtendHttpServlet";
    pub const SERVLET_MISSING_ATTRIBUTES: &str = "WebServletAnnotationMissingAttributes";
    pub const SERVLET_ATTRIBUTE_CONFLICT: &str = "WebServletAnnotationAttributeConflict";
    pub const FILTER_MISSING_ATTRIBUTES: &str = "WebFilterAnnotationMissingAttributes";
    pub const FILTER_ATTRIBUTE_CONFLICT: &str = "WebFilterAnnotationAttributeConflict";
    pub const FILTER_NOT_FILTER: &str = "WebFilterAnnotatedClassReqIfaceNoImpl";
    pub const LISTENER_NOT_LISTENER: &str = "WebListenerAnnotatedClassReqIfaceNoImpl";

    pub const CONSTRAINT_ON_STATIC: &str = "InvalidConstrainAnnotationOnStaticMethodOrField";
    pub const CONSTRAINT_NOT_BOOLEAN: &str = "InvalidAnnotationOnNonBooleanMethodOrField";
    pub const CONSTRAINT_NOT_STRING: &str = "InvalidAnnotationOnNonStringMethodOrField";

    pub const JSONB_CREATORS: &str = "InvalidNumerOfJsonbCreatorAnnotationsInClass";
    pub const JSONB_TRANSIENT_MIXED: &str = "InvalidJSonBindindAnnotationWithJsonbTransientOnField";
}
