use quote::quote;
use proc_macro::TokenStream;
use syn::{Data, DeriveInput, Fields, Type};

pub fn impl_system(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("#[derive(System)] requires a struct with named fields"),
        },
        _ => panic!("#[derive(System)] can only be applied to structs"),
    };

    let state_field = fields
        .iter()
        .find(|field| is_system_state(&field.ty))
        .expect("#[derive(System)] requires a field of type `SystemState`");

    let field_name = state_field.ident.as_ref().unwrap();

    let gen = quote! {
        impl ember_ecs::systems::HasSystemState for #name {
            #[inline(always)]
            fn state(&self) -> &ember_ecs::systems::SystemState {
                &self.#field_name
            }

            #[inline(always)]
            fn state_mut(&mut self) -> &mut ember_ecs::systems::SystemState {
                &mut self.#field_name
            }
        }
    };
    gen.into()
}

fn is_system_state(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "SystemState")
            .unwrap_or(false),
        _ => false,
    }
}
