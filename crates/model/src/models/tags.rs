//! Resource tagging.

use crate::models::common::Tag;
use crate::operation::operation;
use crate::shape::shape;
use validator::Validate;

shape! {
    /// Adds tags to a job, vocabulary, or filter.
    pub struct TagResourceRequest {
        #[validate(required, length(min = 1, max = 1011), custom(function = "crate::validation::resource_arn"))]
        resource_arn / with_resource_arn: String => "ResourceArn",
        #[validate(required, length(min = 1, max = 200), nested)]
        tags / with_tags: Vec<Tag> => "Tags",
    }
}

shape! {
    /// Empty acknowledgement of tagging.
    pub struct TagResourceResponse {}
}

shape! {
    /// Removes tags by key.
    pub struct UntagResourceRequest {
        #[validate(required, length(min = 1, max = 1011), custom(function = "crate::validation::resource_arn"))]
        resource_arn / with_resource_arn: String => "ResourceArn",
        #[validate(required, length(min = 1, max = 200))]
        tag_keys / with_tag_keys: Vec<String> => "TagKeys",
    }
}

shape! {
    /// Empty acknowledgement of untagging.
    pub struct UntagResourceResponse {}
}

shape! {
    /// Lists the tags on one resource.
    pub struct ListTagsForResourceRequest {
        #[validate(required, length(min = 1, max = 1011), custom(function = "crate::validation::resource_arn"))]
        resource_arn / with_resource_arn: String => "ResourceArn",
    }
}

shape! {
    /// Tags currently on the resource.
    pub struct ListTagsForResourceResponse {
        resource_arn / with_resource_arn: String => "ResourceArn",
        tags / with_tags: Vec<Tag> => "Tags",
    }
}

operation!(TagResourceRequest => TagResourceResponse, "TagResource");
operation!(UntagResourceRequest => UntagResourceResponse, "UntagResource");
operation!(ListTagsForResourceRequest => ListTagsForResourceResponse, "ListTagsForResource");
