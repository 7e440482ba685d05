use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let name_str = name.to_string().to_uppercase();
    let id_name = format_ident!("__COMPONENT_ID_OF_{}", name_str);

    let gen = quote! {
        ember_ecs::lazy_static! {
            static ref #id_name: ember_ecs::components::component_id::ComponentId = unsafe {
                ember_ecs::components::component_id::get_next()
            };
        }

        impl ember_ecs::components::Component for #name {}

        impl ember_ecs::components::HasComponentId for #name {
            #[inline(always)]
            fn component_id() -> ember_ecs::components::component_id::ComponentId {
                *#id_name
            }
        }
    };
    gen.into()
}
