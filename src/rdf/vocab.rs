//! IRIs of the RDF, RDFS, OWL, SKOS, XSD and schema.org terms the import
//! engine treats specially.

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// schema.org, http form (the one the metamodel itself uses)
pub const SCHEMA_HTTP_NS: &str = "http://schema.org/";
/// schema.org, https form
pub const SCHEMA_HTTPS_NS: &str = "https://schema.org/";

// rdf
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";

// rdfs
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

// owl
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

// skos
pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
pub const SKOS_BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";

// schema.org
pub const SCHEMA_HTTP_DOMAIN_INCLUDES: &str = "http://schema.org/domainIncludes";
pub const SCHEMA_HTTPS_DOMAIN_INCLUDES: &str = "https://schema.org/domainIncludes";
pub const SCHEMA_HTTP_RANGE_INCLUDES: &str = "http://schema.org/rangeIncludes";
pub const SCHEMA_HTTPS_RANGE_INCLUDES: &str = "https://schema.org/rangeIncludes";
pub const SCHEMA_HTTP_SAME_AS: &str = "http://schema.org/sameAs";

// xsd datatypes folded into native literal values
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

/// xsd integer datatype local names (all derived from xsd:integer)
pub const XSD_INTEGER_TYPES: [&str; 13] = [
    "integer",
    "int",
    "long",
    "short",
    "byte",
    "nonNegativeInteger",
    "positiveInteger",
    "nonPositiveInteger",
    "negativeInteger",
    "unsignedLong",
    "unsignedInt",
    "unsignedShort",
    "unsignedByte",
];
