//! A small XSD document model.
//!
//! Every element sequence keeps its children in a `"Choice"` attribute: an
//! array of an anonymous, untagged choice. Looking up a child name such as
//! `"element"` on the sequence resolves to that attribute.
crate::sequence! {
    pub struct BasicSchemaAnnotationElement ("BasicSchemaAnnotationElement") {
        ATTRIBUTE_ID_DOCUMENTATION = 0 => documentation: Option<String> as "documentation" [TEXT],
    }
}

crate::choice! {
    pub enum BasicSchemaEnumerationElementChoice ("BasicSchemaEnumerationElementChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
    }
}

crate::sequence! {
    pub struct BasicSchemaEnumerationElement ("BasicSchemaEnumerationElement") {
        ATTRIBUTE_ID_VALUE = 0 => value: Option<String> as "value" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CHOICE = 1 => choice: Vec<BasicSchemaEnumerationElementChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

crate::choice! {
    pub enum BasicSchemaRestrictionElementChoice ("BasicSchemaRestrictionElementChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
        SELECTION_ID_ENUMERATION = 1 => Enumeration(BasicSchemaEnumerationElement) as "enumeration" [DEFAULT] {
            is_enumeration_value, enumeration, enumeration_mut, make_enumeration, make_enumeration_with
        },
    }
}

crate::sequence! {
    pub struct BasicSchemaRestrictionElement ("BasicSchemaRestrictionElement") {
        ATTRIBUTE_ID_BASE = 0 => base: Option<String> as "base" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CHOICE = 1 => choice: Vec<BasicSchemaRestrictionElementChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

crate::choice! {
    pub enum BasicSchemaSimpleTypeElementChoice ("BasicSchemaSimpleTypeElementChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
        SELECTION_ID_RESTRICTION = 1 => Restriction(BasicSchemaRestrictionElement) as "restriction" [DEFAULT] {
            is_restriction_value, restriction, restriction_mut, make_restriction, make_restriction_with
        },
    }
}

crate::sequence! {
    pub struct BasicSchemaSimpleTypeElement ("BasicSchemaSimpleTypeElement") {
        ATTRIBUTE_ID_NAME = 0 => name: Option<String> as "name" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_PRESERVE_ENUM_ORDER = 1 => preserve_enum_order: Option<String> as "preserveEnumOrder" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CHOICE = 2 => choice: Vec<BasicSchemaSimpleTypeElementChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

crate::sequence! {
    pub struct BasicSchemaChoiceElement ("BasicSchemaChoiceElement") {
        ATTRIBUTE_ID_CHOICE = 0 => choice: Vec<BasicSchemaChoiceElementChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

crate::choice! {
    pub enum BasicSchemaChoiceElementChoice ("BasicSchemaChoiceElementChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
        SELECTION_ID_ELEMENT = 1 => Element(Box<BasicSchemaElement>) as "element" [DEFAULT] {
            is_element_value, element, element_mut, make_element, make_element_with
        },
    }
}

crate::sequence! {
    pub struct BasicSchemaComplexTypeElement ("BasicSchemaComplexTypeElement") {
        ATTRIBUTE_ID_NAME = 0 => name: Option<String> as "name" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CHOICE = 1 => choice: Vec<BasicSchemaComplexTypeElementChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

crate::choice! {
    pub enum BasicSchemaComplexTypeElementChoice ("BasicSchemaComplexTypeElementChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
        SELECTION_ID_SEQUENCE = 1 => Sequence(Box<BasicSchemaSequenceElement>) as "sequence" [DEFAULT] {
            is_sequence_value, sequence, sequence_mut, make_sequence, make_sequence_with
        },
        SELECTION_ID_CHOICE = 2 => Choice(Box<BasicSchemaChoiceElement>) as "choice" [DEFAULT] {
            is_choice_value, choice, choice_mut, make_choice, make_choice_with
        },
    }
}

crate::sequence! {
    pub struct BasicSchemaElement ("BasicSchemaElement") {
        ATTRIBUTE_ID_NAME = 0 => name: Option<String> as "name" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_TYPE = 1 => type_: Option<String> as "type" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_MIN_OCCURS = 2 => min_occurs: Option<String> as "minOccurs" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_MAX_OCCURS = 3 => max_occurs: Option<String> as "maxOccurs" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_DEFAULT_VALUE = 4 => default_value: Option<String> as "default" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CPPDEFAULT = 5 => cppdefault: Option<String> as "cppdefault" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CPPTYPE = 6 => cpptype: Option<String> as "cpptype" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_ALLOCATES_MEMORY = 7 => allocates_memory: Option<String> as "allocatesMemory" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_ALLOWS_DIRECT_MANIPULATION = 8 => allows_direct_manipulation: Option<String>
            as "allowsDirectManipulation" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CHOICE = 9 => choice: Vec<BasicSchemaElementChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

crate::choice! {
    pub enum BasicSchemaElementChoice ("BasicSchemaElementChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
        SELECTION_ID_SIMPLE_TYPE = 1 => SimpleType(BasicSchemaSimpleTypeElement) as "simpleType" [DEFAULT] {
            is_simple_type_value, simple_type, simple_type_mut, make_simple_type, make_simple_type_with
        },
        SELECTION_ID_COMPLEX_TYPE = 2 => ComplexType(Box<BasicSchemaComplexTypeElement>) as "complexType" [DEFAULT] {
            is_complex_type_value, complex_type, complex_type_mut, make_complex_type, make_complex_type_with
        },
    }
}

crate::sequence! {
    pub struct BasicSchemaSequenceElement ("BasicSchemaSequenceElement") {
        ATTRIBUTE_ID_CHOICE = 0 => choice: Vec<BasicSchemaSequenceElementChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

crate::choice! {
    pub enum BasicSchemaSequenceElementChoice ("BasicSchemaSequenceElementChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
        SELECTION_ID_ELEMENT = 1 => Element(Box<BasicSchemaElement>) as "element" [DEFAULT] {
            is_element_value, element, element_mut, make_element, make_element_with
        },
    }
}

crate::choice! {
    pub enum BasicSchemaChoice ("BasicSchemaChoice") {
        SELECTION_ID_ANNOTATION = 0 => Annotation(BasicSchemaAnnotationElement) as "annotation" [DEFAULT] {
            is_annotation_value, annotation, annotation_mut, make_annotation, make_annotation_with
        },
        SELECTION_ID_SIMPLE_TYPE = 1 => SimpleType(BasicSchemaSimpleTypeElement) as "simpleType" [DEFAULT] {
            is_simple_type_value, simple_type, simple_type_mut, make_simple_type, make_simple_type_with
        },
        SELECTION_ID_COMPLEX_TYPE = 2 => ComplexType(Box<BasicSchemaComplexTypeElement>) as "complexType" [DEFAULT] {
            is_complex_type_value, complex_type, complex_type_mut, make_complex_type, make_complex_type_with
        },
    }
}

crate::sequence! {
    pub struct BasicSchema ("BasicSchema") {
        ATTRIBUTE_ID_XS = 0 => xs: Option<String> as "xs" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_BDEM = 1 => bdem: Option<String> as "bdem" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_PACKAGE = 2 => package: Option<String> as "package" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_ELEMENT_FORM_DEFAULT = 3 => element_form_default: Option<String>
            as "elementFormDefault" [TEXT | ATTRIBUTE],
        ATTRIBUTE_ID_CHOICE = 4 => choice: Vec<BasicSchemaChoice> as "Choice" [DEFAULT | UNTAGGED],
    }
}

// ------------------------------- Tests ------------------------------------ //
