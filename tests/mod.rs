mod support;

mod pagination_properties;
