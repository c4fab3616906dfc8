use proc_macro::TokenStream;
use quote::quote;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, Pat, ReturnType, Type, Visibility,
    parse_macro_input};

/// Generates a `ReflectMethods` implementation from an inherent `impl` block.
///
/// The block is re-emitted unchanged; alongside it, a method table and a
/// type-checked dispatch function are generated. Every non-generic,
/// non-async `fn` in the block is listed, public and private, instance
/// (`&self` / `&mut self`) and associated. Only methods declared directly
/// in the annotated block are reflectable.
///
/// # Usage
///
/// ```ignore
/// #[reflect_methods]
/// impl Health {
///     pub fn heal(&mut self, amount: i64) -> i64 {
///         self.current = (self.current + amount).min(self.max);
///         self.current
///     }
///
///     fn reset(&mut self) {
///         self.current = self.max;
///     }
/// }
/// ```
///
/// Parameter types map to kinds: `String`, `i64`, `f64`, `bool`, and
/// `ObjectId` are supported; any other type is tagged `Opaque`, which keeps
/// the method listed but unreachable through dispatch. Generic fns, async
/// fns, and fns taking `self` by value are skipped entirely.
#[proc_macro_attribute]
pub fn reflect_methods(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemImpl);

    if input.trait_.is_some() {
        return syn::Error::new_spanned(
            &input.self_ty,
            "#[reflect_methods] applies to inherent impl blocks, not trait impls",
        )
        .to_compile_error()
        .into();
    }
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[reflect_methods] does not support generic impl blocks",
        )
        .to_compile_error()
        .into();
    }

    let self_ty = &input.self_ty;
    let type_name_str = match type_name_of(self_ty) {
        Some(name) => name,
        None => {
            return syn::Error::new_spanned(
                self_ty,
                "#[reflect_methods] requires a plain type path (e.g. `impl Health`)",
            )
            .to_compile_error()
            .into();
        }
    };

    let methods: Vec<MethodModel<'_>> = input
        .items
        .iter()
        .filter_map(|item| match item {
            ImplItem::Fn(method) => MethodModel::from_fn(method),
            _ => None,
        })
        .collect();

    let infos = methods.iter().map(MethodModel::info_tokens);
    let arms = methods.iter().filter_map(MethodModel::dispatch_arm);

    let expanded = quote! {
        #input

        impl bluebell_reflect::ReflectMethods for #self_ty {
            fn type_name(&self) -> &'static str {
                #type_name_str
            }

            fn methods(&self) -> &'static [bluebell_reflect::MethodInfo] {
                static TABLE: ::std::sync::LazyLock<::std::vec::Vec<bluebell_reflect::MethodInfo>> =
                    ::std::sync::LazyLock::new(|| {
                        ::std::vec::Vec::from([#(#infos),*])
                    });
                &TABLE
            }

            fn call_method(
                &mut self,
                name: &str,
                args: &[bluebell_reflect::ArgValue],
            ) -> ::core::option::Option<bluebell_reflect::ArgValue> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    expanded.into()
}

/// Kind classification mirrored from `bluebell_reflect::ArgKind`.
#[derive(Clone, Copy, PartialEq)]
enum Kind {
    Text,
    Int,
    Float,
    Bool,
    Handle,
    Opaque,
}

impl Kind {
    fn tokens(self) -> proc_macro2::TokenStream {
        match self {
            Kind::Text => quote! { bluebell_reflect::ArgKind::Text },
            Kind::Int => quote! { bluebell_reflect::ArgKind::Int },
            Kind::Float => quote! { bluebell_reflect::ArgKind::Float },
            Kind::Bool => quote! { bluebell_reflect::ArgKind::Bool },
            Kind::Handle => quote! { bluebell_reflect::ArgKind::Handle },
            Kind::Opaque => quote! { bluebell_reflect::ArgKind::Opaque },
        }
    }
}

/// One reflectable method extracted from the impl block.
struct MethodModel<'a> {
    ident: &'a syn::Ident,
    params: Vec<(&'a syn::Ident, &'a Type, Kind)>,
    ret: Option<(&'a Type, Kind)>,
    is_static: bool,
    is_public: bool,
}

impl<'a> MethodModel<'a> {
    /// Extract a model, or `None` when the fn falls outside the supported
    /// shape (generic, async, unsafe, by-value receiver, non-ident params).
    fn from_fn(method: &'a ImplItemFn) -> Option<Self> {
        let sig = &method.sig;
        if !sig.generics.params.is_empty()
            || sig.asyncness.is_some()
            || sig.unsafety.is_some()
            || sig.abi.is_some()
        {
            return None;
        }

        let is_static = match sig.receiver() {
            Some(receiver) => {
                if receiver.reference.is_none() {
                    // Consuming receiver: cannot be called through a borrow.
                    return None;
                }
                false
            }
            None => true,
        };

        let mut params = Vec::new();
        for arg in &sig.inputs {
            if let FnArg::Typed(typed) = arg {
                let Pat::Ident(pat) = typed.pat.as_ref() else {
                    return None;
                };
                let kind = infer_arg_kind(&typed.ty);
                params.push((&pat.ident, typed.ty.as_ref(), kind));
            }
        }

        let ret = match &sig.output {
            ReturnType::Default => None,
            ReturnType::Type(_, ty) => Some((ty.as_ref(), infer_arg_kind(ty))),
        };

        Some(Self {
            ident: &sig.ident,
            params,
            ret,
            is_static,
            is_public: matches!(method.vis, Visibility::Public(_)),
        })
    }

    /// Tokens building the `MethodInfo` entry for the static table.
    fn info_tokens(&self) -> proc_macro2::TokenStream {
        let name_str = self.ident.to_string();
        let params = self.params.iter().map(|(ident, ty, kind)| {
            let pname = ident.to_string();
            let kind_tok = kind.tokens();
            quote! {
                bluebell_reflect::ParamInfo {
                    name: #pname,
                    type_name: ::core::any::type_name::<#ty>(),
                    kind: #kind_tok,
                }
            }
        });
        let (ret, ret_type_name) = match self.ret {
            None => (
                quote! { ::core::option::Option::None },
                quote! { "()" },
            ),
            Some((ty, Kind::Opaque)) => (
                quote! { ::core::option::Option::None },
                quote! { ::core::any::type_name::<#ty>() },
            ),
            Some((ty, kind)) => {
                let kind_tok = kind.tokens();
                (
                    quote! { ::core::option::Option::Some(#kind_tok) },
                    quote! { ::core::any::type_name::<#ty>() },
                )
            }
        };
        let is_static = self.is_static;
        let is_public = self.is_public;

        quote! {
            bluebell_reflect::MethodInfo {
                name: #name_str,
                params: ::std::vec::Vec::from([#(#params),*]),
                ret: #ret,
                ret_type_name: #ret_type_name,
                is_static: #is_static,
                is_public: #is_public,
            }
        }
    }

    /// Tokens for the `call_method` match arm, or `None` when any parameter
    /// is opaque (the method stays listed but has no dispatch path).
    fn dispatch_arm(&self) -> Option<proc_macro2::TokenStream> {
        if self.params.iter().any(|(_, _, kind)| *kind == Kind::Opaque) {
            return None;
        }

        let name_str = self.ident.to_string();
        let patterns = self.params.iter().map(|(ident, _, kind)| match kind {
            Kind::Text => quote! { bluebell_reflect::ArgValue::Text(#ident) },
            Kind::Int => quote! { bluebell_reflect::ArgValue::Int(#ident) },
            Kind::Float => quote! { bluebell_reflect::ArgValue::Float(#ident) },
            Kind::Bool => quote! { bluebell_reflect::ArgValue::Bool(#ident) },
            Kind::Handle => quote! { bluebell_reflect::ArgValue::Handle(#ident) },
            Kind::Opaque => unreachable!(),
        });
        let call_args = self.params.iter().map(|(ident, _, kind)| match kind {
            Kind::Text => quote! { #ident.clone() },
            _ => quote! { *#ident },
        });

        let ident = self.ident;
        let call = if self.is_static {
            quote! { Self::#ident(#(#call_args),*) }
        } else {
            quote! { self.#ident(#(#call_args),*) }
        };

        let body = match self.ret {
            None => quote! {
                #call;
                ::core::option::Option::None
            },
            Some((_, Kind::Opaque)) => quote! {
                let _ = #call;
                ::core::option::Option::None
            },
            Some((_, kind)) => {
                let wrap = match kind {
                    Kind::Text => quote! { bluebell_reflect::ArgValue::Text },
                    Kind::Int => quote! { bluebell_reflect::ArgValue::Int },
                    Kind::Float => quote! { bluebell_reflect::ArgValue::Float },
                    Kind::Bool => quote! { bluebell_reflect::ArgValue::Bool },
                    Kind::Handle => quote! { bluebell_reflect::ArgValue::Handle },
                    Kind::Opaque => unreachable!(),
                };
                quote! {
                    ::core::option::Option::Some(#wrap(#call))
                }
            }
        };

        Some(quote! {
            #name_str => {
                if let [#(#patterns),*] = args {
                    #body
                } else {
                    ::core::option::Option::None
                }
            }
        })
    }
}

/// Infer the argument kind from a type by matching the last path segment.
fn infer_arg_kind(ty: &Type) -> Kind {
    match extract_last_segment(ty).as_str() {
        "String" => Kind::Text,
        "i64" => Kind::Int,
        "f64" => Kind::Float,
        "bool" => Kind::Bool,
        "ObjectId" => Kind::Handle,
        _ => Kind::Opaque,
    }
}

/// Extract the last segment name from a type path (e.g. `reflect::ObjectId`
/// → `"ObjectId"`). Non-path types (references, tuples) yield `""`.
fn extract_last_segment(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => {
            if let Some(segment) = type_path.path.segments.last() {
                segment.ident.to_string()
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}

/// The last segment of the impl target's type path, if it is one.
fn type_name_of(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}
