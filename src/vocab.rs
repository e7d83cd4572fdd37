//! RDF, RDFS, OWL, XSD and SWRL vocabulary constants.
//!
//! Constants are grouped by vocabulary. The [`BuiltIns`] registry answers
//! "is this IRI a built-in entity of kind K" and "is this IRI reserved
//! vocabulary" for role casting; it is built once per process and never
//! mutated.

use std::collections::HashSet;
use std::sync::OnceLock;

/// RDF vocabulary constants.
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    pub const LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    pub const PLAIN_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral";
    pub const XML_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral";
}

/// RDFS vocabulary constants.
pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
    pub const LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
    pub const IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
}

/// XSD vocabulary constants.
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// OWL vocabulary constants.
pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    // Entity and structural types
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    pub const AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
    pub const ANNOTATION: &str = "http://www.w3.org/2002/07/owl#Annotation";
    pub const ALL_DISJOINT_CLASSES: &str = "http://www.w3.org/2002/07/owl#AllDisjointClasses";
    pub const ALL_DIFFERENT: &str = "http://www.w3.org/2002/07/owl#AllDifferent";
    pub const ALL_DISJOINT_PROPERTIES: &str =
        "http://www.w3.org/2002/07/owl#AllDisjointProperties";
    pub const NEGATIVE_PROPERTY_ASSERTION: &str =
        "http://www.w3.org/2002/07/owl#NegativePropertyAssertion";

    // Property characteristics
    pub const FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    pub const INVERSE_FUNCTIONAL_PROPERTY: &str =
        "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
    pub const REFLEXIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ReflexiveProperty";
    pub const IRREFLEXIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#IrreflexiveProperty";
    pub const SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
    pub const ASYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AsymmetricProperty";
    pub const TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";

    // Axiom predicates
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    pub const DISJOINT_UNION_OF: &str = "http://www.w3.org/2002/07/owl#disjointUnionOf";
    pub const EQUIVALENT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#equivalentProperty";
    pub const PROPERTY_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#propertyDisjointWith";
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    pub const PROPERTY_CHAIN_AXIOM: &str = "http://www.w3.org/2002/07/owl#propertyChainAxiom";
    pub const HAS_KEY: &str = "http://www.w3.org/2002/07/owl#hasKey";
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
    pub const DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";
    pub const MEMBERS: &str = "http://www.w3.org/2002/07/owl#members";
    pub const DISTINCT_MEMBERS: &str = "http://www.w3.org/2002/07/owl#distinctMembers";
    pub const SOURCE_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#sourceIndividual";
    pub const ASSERTION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#assertionProperty";
    pub const TARGET_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#targetIndividual";
    pub const TARGET_VALUE: &str = "http://www.w3.org/2002/07/owl#targetValue";

    // Annotation reification
    pub const ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
    pub const ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
    pub const ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";

    // Class expression vocabulary
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
    pub const HAS_SELF: &str = "http://www.w3.org/2002/07/owl#hasSelf";
    pub const MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    pub const CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    pub const MIN_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#minQualifiedCardinality";
    pub const MAX_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#maxQualifiedCardinality";
    pub const QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#qualifiedCardinality";
    pub const ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
    pub const ON_DATA_RANGE: &str = "http://www.w3.org/2002/07/owl#onDataRange";
    pub const DATATYPE_COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#datatypeComplementOf";
    pub const ON_DATATYPE: &str = "http://www.w3.org/2002/07/owl#onDatatype";
    pub const WITH_RESTRICTIONS: &str = "http://www.w3.org/2002/07/owl#withRestrictions";

    // Built-in entities
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
    pub const TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";
    pub const BOTTOM_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomObjectProperty";
    pub const TOP_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topDataProperty";
    pub const BOTTOM_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomDataProperty";
    pub const REAL: &str = "http://www.w3.org/2002/07/owl#real";
    pub const RATIONAL: &str = "http://www.w3.org/2002/07/owl#rational";
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    pub const DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";
    pub const PRIOR_VERSION: &str = "http://www.w3.org/2002/07/owl#priorVersion";
    pub const BACKWARD_COMPATIBLE_WITH: &str =
        "http://www.w3.org/2002/07/owl#backwardCompatibleWith";
    pub const INCOMPATIBLE_WITH: &str = "http://www.w3.org/2002/07/owl#incompatibleWith";
}

/// SWRL vocabulary constants.
pub mod swrl {
    pub const NS: &str = "http://www.w3.org/2003/11/swrl#";
    pub const IMP: &str = "http://www.w3.org/2003/11/swrl#Imp";
    pub const BODY: &str = "http://www.w3.org/2003/11/swrl#body";
    pub const HEAD: &str = "http://www.w3.org/2003/11/swrl#head";
    pub const VARIABLE: &str = "http://www.w3.org/2003/11/swrl#Variable";
    pub const CLASS_ATOM: &str = "http://www.w3.org/2003/11/swrl#ClassAtom";
    pub const DATA_RANGE_ATOM: &str = "http://www.w3.org/2003/11/swrl#DataRangeAtom";
    pub const INDIVIDUAL_PROPERTY_ATOM: &str =
        "http://www.w3.org/2003/11/swrl#IndividualPropertyAtom";
    pub const DATAVALUED_PROPERTY_ATOM: &str =
        "http://www.w3.org/2003/11/swrl#DatavaluedPropertyAtom";
    pub const SAME_INDIVIDUAL_ATOM: &str = "http://www.w3.org/2003/11/swrl#SameIndividualAtom";
    pub const DIFFERENT_INDIVIDUALS_ATOM: &str =
        "http://www.w3.org/2003/11/swrl#DifferentIndividualsAtom";
    pub const BUILTIN_ATOM: &str = "http://www.w3.org/2003/11/swrl#BuiltinAtom";
    pub const BUILTIN_CLASS: &str = "http://www.w3.org/2003/11/swrl#Builtin";
    pub const CLASS_PREDICATE: &str = "http://www.w3.org/2003/11/swrl#classPredicate";
    pub const DATA_RANGE: &str = "http://www.w3.org/2003/11/swrl#dataRange";
    pub const PROPERTY_PREDICATE: &str = "http://www.w3.org/2003/11/swrl#propertyPredicate";
    pub const BUILTIN: &str = "http://www.w3.org/2003/11/swrl#builtin";
    pub const ARGUMENT1: &str = "http://www.w3.org/2003/11/swrl#argument1";
    pub const ARGUMENT2: &str = "http://www.w3.org/2003/11/swrl#argument2";
    pub const ARGUMENTS: &str = "http://www.w3.org/2003/11/swrl#arguments";
}

/// Built-in entities of the OWL2 vocabulary.
///
/// Built-ins are valid in their role without any declaration and cannot be
/// punned away. Every other IRI in the RDF, RDFS, OWL, XSD or SWRL namespaces
/// is reserved and never casts to an entity role.
#[derive(Debug)]
pub struct BuiltIns {
    classes: HashSet<&'static str>,
    datatypes: HashSet<String>,
    object_properties: HashSet<&'static str>,
    data_properties: HashSet<&'static str>,
    annotation_properties: HashSet<&'static str>,
}

const RESERVED_NAMESPACES: [&str; 5] = [rdf::NS, rdfs::NS, owl::NS, xsd::NS, swrl::NS];

const XSD_DATATYPES: [&str; 31] = [
    "string",
    "normalizedString",
    "token",
    "language",
    "Name",
    "NCName",
    "NMTOKEN",
    "boolean",
    "decimal",
    "integer",
    "nonNegativeInteger",
    "nonPositiveInteger",
    "positiveInteger",
    "negativeInteger",
    "long",
    "int",
    "short",
    "byte",
    "unsignedLong",
    "unsignedInt",
    "unsignedShort",
    "unsignedByte",
    "double",
    "float",
    "hexBinary",
    "base64Binary",
    "anyURI",
    "dateTime",
    "dateTimeStamp",
    "date",
    "time",
];

impl BuiltIns {
    fn new() -> Self {
        let mut datatypes: HashSet<String> = [
            rdf::PLAIN_LITERAL,
            rdf::XML_LITERAL,
            rdf::LANG_STRING,
            rdfs::LITERAL,
            owl::REAL,
            owl::RATIONAL,
        ]
        .into_iter()
        .map(String::from)
        .collect();
        datatypes.extend(XSD_DATATYPES.iter().map(|local| format!("{}{local}", xsd::NS)));

        Self {
            classes: [owl::THING, owl::NOTHING].into_iter().collect(),
            datatypes,
            object_properties: [owl::TOP_OBJECT_PROPERTY, owl::BOTTOM_OBJECT_PROPERTY]
                .into_iter()
                .collect(),
            data_properties: [owl::TOP_DATA_PROPERTY, owl::BOTTOM_DATA_PROPERTY]
                .into_iter()
                .collect(),
            annotation_properties: [
                rdfs::LABEL,
                rdfs::COMMENT,
                rdfs::SEE_ALSO,
                rdfs::IS_DEFINED_BY,
                owl::VERSION_INFO,
                owl::DEPRECATED,
                owl::PRIOR_VERSION,
                owl::BACKWARD_COMPATIBLE_WITH,
                owl::INCOMPATIBLE_WITH,
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn is_class(&self, iri: &str) -> bool {
        self.classes.contains(iri)
    }

    pub fn is_datatype(&self, iri: &str) -> bool {
        self.datatypes.contains(iri)
    }

    pub fn is_object_property(&self, iri: &str) -> bool {
        self.object_properties.contains(iri)
    }

    pub fn is_data_property(&self, iri: &str) -> bool {
        self.data_properties.contains(iri)
    }

    pub fn is_annotation_property(&self, iri: &str) -> bool {
        self.annotation_properties.contains(iri)
    }

    /// Whether `iri` is a built-in entity of any kind.
    pub fn is_builtin(&self, iri: &str) -> bool {
        self.is_class(iri)
            || self.is_datatype(iri)
            || self.is_object_property(iri)
            || self.is_data_property(iri)
            || self.is_annotation_property(iri)
    }

    /// Whether `iri` belongs to a standard namespace without being a built-in.
    ///
    /// Reserved IRIs (`rdf:type`, `owl:Class`, `owl:annotatedSource`, ...) are
    /// structural vocabulary and never denote ontology entities.
    pub fn is_reserved(&self, iri: &str) -> bool {
        !self.is_builtin(iri) && RESERVED_NAMESPACES.iter().any(|ns| iri.starts_with(ns))
    }
}

/// The process-wide built-in registry.
pub fn builtins() -> &'static BuiltIns {
    static BUILTINS: OnceLock<BuiltIns> = OnceLock::new();
    BUILTINS.get_or_init(BuiltIns::new)
}
